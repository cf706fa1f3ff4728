pub mod api_utils;
pub mod http;
pub mod resource;
