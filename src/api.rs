pub mod auroravision;
