pub mod feature;
pub mod model;
pub mod segmenter;

pub use feature::{Feature, UnknownFeature};
pub use model::embedded::EmbeddedModel;
pub use model::loaded::LoadedModel;
pub use model::{Model, ModelError};
pub use segmenter::Segmenter;
