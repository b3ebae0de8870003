use image::ImageError;

#[derive(thiserror::Error, Debug)]
pub enum AvatarError {
    #[error("avatar is {size} bytes, limit is {limit}")]
    TooLarge { size: usize, limit: usize },
    #[error("avatar quality must be between 1 and 100, got {0}")]
    InvalidQuality(u8),
    #[error("avatar max dimension must be positive")]
    InvalidDimension,
    #[error("could not read avatar: {0}")]
    Read(#[from] std::io::Error),
    #[error("could not decode avatar image: {0}")]
    Decode(#[source] ImageError),
    #[error("could not encode avatar image: {0}")]
    Encode(#[source] ImageError),
    #[error("avatar worker failed: {message}")]
    Worker { message: String },
}
