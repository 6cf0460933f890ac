//! Types shared between the shelf UI and its backend, plus a client for the
//! backend API.

pub mod api_client;
pub mod requests;
pub mod responses;

use derive_more::Display;
use serde::{Deserialize, Serialize};

pub use api_client::{APIClient, ClientError};
pub use responses::BookRecord;

/// Largest upload the backend accepts, in bytes.
pub const MAX_UPLOAD_SIZE: usize = 256 * 1024 * 1024;

/// Identifier of a stored audiobook file, opaque to the page. Storage
/// providers pick their own formats, so it is kept as a plain string.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct FileId(pub String);
