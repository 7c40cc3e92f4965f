mod request;
mod response;

pub use request::{Input, Parameters, RequestBody};
pub use response::{Output, ResponseBody};
