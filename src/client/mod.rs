pub mod api;
pub mod controller;
pub mod notice;
pub mod picker;

pub use api::{ClientError, GalleryApi};
pub use controller::{GalleryController, ViewState};
pub use notice::{Notice, NoticeBoard, NoticeKind};
pub use picker::{PickError, UploadCandidate, validate_candidate};
