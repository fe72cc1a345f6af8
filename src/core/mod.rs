pub mod axis;
pub mod interval;
pub mod kinds;
pub mod label_format;
pub mod primitives;
pub mod range;
pub mod ticks;
pub mod transform;
pub mod types;

pub use axis::{Axis, AxisComputed, AxisConfig, AxisSnapshot};
pub use interval::{CalendarInterval, CalendarUnit};
pub use kinds::{
    AxisKind, AxisStrategy, CategoryBar, CategoryLayout, CategoryOptions, DateTimeOptions,
    IntervalChoice, LogarithmicOptions,
};
pub use label_format::{LabelFormat, LabelLocale};
pub use range::{ActualRange, DataRange};
pub use ticks::{ArithmeticTicks, TickValues};
pub use transform::{AxisTransform, INVALID_SCREEN_COORDINATE, ScreenEndpoints};
pub use types::{AxisKey, AxisPosition, DataPoint, ScreenPoint, ScreenRect};
