use crate::requests::entities::HttpRequestData;
use anyhow::Result;

/// Performs a single blocking request and returns the raw response body.
/// Any non-2xx status is an error.
pub trait SyncHttpRequest {
    fn call(&self, req: HttpRequestData) -> Result<String>;
}

impl<T: SyncHttpRequest + ?Sized> SyncHttpRequest for &T {
    fn call(&self, req: HttpRequestData) -> Result<String> {
        (**self).call(req)
    }
}
