use crate::error::WireError;
use crate::types::{GetRequest, GetResponse};

pub const CONTENT_TYPE_JSON: &str = "application/json";

pub fn encode_request(req: &GetRequest) -> Result<Vec<u8>, WireError> {
    Ok(serde_json::to_vec(req)?)
}

pub fn decode_request(buf: &[u8]) -> Result<GetRequest, WireError> {
    decode(buf)
}

pub fn encode_response(resp: &GetResponse) -> Result<Vec<u8>, WireError> {
    Ok(serde_json::to_vec(resp)?)
}

pub fn decode_response(buf: &[u8]) -> Result<GetResponse, WireError> {
    decode(buf)
}

fn decode<T: serde::de::DeserializeOwned>(buf: &[u8]) -> Result<T, WireError> {
    if buf.iter().all(u8::is_ascii_whitespace) {
        return Err(WireError::EmptyBody);
    }
    Ok(serde_json::from_slice(buf)?)
}
