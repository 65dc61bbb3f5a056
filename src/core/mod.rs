pub mod coordinator;
pub mod scale;
mod ticks;
pub mod types;

pub use coordinator::Coordinator;
pub use scale::{LinearScale, Log10Scale, Scale, ScaleType, create_scale};
pub use types::{
    DataInternalSeries, DataPoint, DataSeries, DataSeriesMetadata, Rect, SeriesMetadataMap,
};
