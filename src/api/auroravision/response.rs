use serde::Deserialize;

/// Every Aurora Vision endpoint wraps its payload into `result`.
///
/// For the production query, the whole field may be missing on days without data,
/// hence `Option` there.
#[derive(Deserialize)]
pub struct Response<R> {
    pub result: R,
}
