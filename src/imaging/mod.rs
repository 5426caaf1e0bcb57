mod data_uri;
mod texture;

pub use data_uri::{decode_data_uri, encode_data_uri};
pub use texture::{calculate_fit_scale, decode_data_uri_to_texture};
