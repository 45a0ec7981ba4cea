//! pergola_charts
//!
//! Chart constructors for Pergola pages. Each constructor follows the
//! catalogue convention (camelCase prop map, unset attributes omitted,
//! auto-derived keys) and registers one chart element in the current
//! scope, returning its [`pergola_core::Scope`] handle.
//!
//! Charts take their data as JSON rows (or a value list / date map for
//! sparkline and heatmap) and, where applicable, a [`ChartSeries`] list
//! naming the plotted fields:
//!
//! ```
//! use pergola_charts::prelude::*;
//! use pergola_core::Session;
//! use pergola_ui::Ui;
//! use serde_json::json;
//!
//! let mut session = Session::new();
//! let mut ui = Ui::new(&mut session);
//! line_chart(
//!     &mut ui,
//!     json!([{"month": "Jan", "sales": 400}, {"month": "Feb", "sales": 610}]),
//!     "month",
//!     [ChartSeries::new("sales").color("teal.6")],
//!     LineChartProps::default(),
//! );
//! ```

pub mod area;
pub mod bar;
mod common;
pub mod heatmap;
pub mod line;
pub mod pie;
pub mod radar;
pub mod scatter;
pub mod sparkline;

pub use common::{wire_series, ChartSeries};

/// Common imports for chart users.
pub mod prelude {
    pub use crate::area::{area_chart, AreaChartProps};
    pub use crate::bar::{bar_chart, radial_bar_chart, BarChartProps, RadialBarChartProps};
    pub use crate::common::ChartSeries;
    pub use crate::heatmap::{heatmap, HeatmapProps};
    pub use crate::line::{composite_chart, line_chart, CompositeChartProps, LineChartProps};
    pub use crate::pie::{
        donut_chart, funnel_chart, pie_chart, DonutChartProps, FunnelChartProps, PieChartProps,
    };
    pub use crate::radar::{radar_chart, RadarChartProps};
    pub use crate::scatter::{bubble_chart, scatter_chart, BubbleChartProps, ScatterChartProps};
    pub use crate::sparkline::{sparkline_chart, SparklineChartProps};
}
