pub mod classification;
pub mod entry;
pub mod request;
pub mod response;
