use clap::Parser;

use crate::{cli::auroravision::AuroraVisionApiArgs, prelude::*};

#[derive(Parser)]
pub struct AuthenticateArgs {
    #[clap(flatten)]
    aurora_vision: AuroraVisionApiArgs,
}

impl AuthenticateArgs {
    #[instrument(skip_all)]
    pub fn run(self) -> Result {
        let token = self.aurora_vision.new_api().authenticate().context("failed to authenticate")?;
        info!(token_length = token.as_str().len(), "gotcha");
        Ok(())
    }
}
