//! Stock level bar chart.
//!
//! Layout is computed in plain `f64` SVG user units so it can be tested
//! without a browser; the component only turns it into markup.

use leptos::prelude::*;

use crate::api::StockLevels;

const WIDTH: f64 = 720.0;
const HEIGHT: f64 = 400.0;
const MARGIN_LEFT: f64 = 48.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 32.0;
const MARGIN_BOTTOM: f64 = 40.0;

/// Fraction of each category band occupied by its bar.
const BAR_FILL_RATIO: f64 = 0.8;

/// The value axis always covers at least this range.
const SUGGESTED_MIN: f64 = -10.0;
const SUGGESTED_MAX: f64 = 20.0;

const TARGET_TICKS: f64 = 6.0;

const BAR_FILL: &str = "rgba(75, 192, 192, 0.2)";
const BAR_BORDER: &str = "rgba(75, 192, 192, 1)";
const SERIES_LABEL: &str = "Quantidade";

/// Vertical value range of the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ValueAxis {
    pub min: f64,
    pub max: f64,
}

impl ValueAxis {
    /// Smallest axis that includes the suggested range and every finite value.
    pub(crate) fn covering(values: impl IntoIterator<Item = f64>) -> Self {
        values
            .into_iter()
            .filter(|value| value.is_finite())
            .fold(
                Self {
                    min: SUGGESTED_MIN,
                    max: SUGGESTED_MAX,
                },
                |axis, value| Self {
                    min: axis.min.min(value),
                    max: axis.max.max(value),
                },
            )
    }

    fn span(self) -> f64 {
        self.max - self.min
    }

    /// Map a value to a y coordinate inside the plot area.
    fn y_of(self, value: f64) -> f64 {
        let plot_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

        MARGIN_TOP + (self.max - value) / self.span() * plot_height
    }

    /// Evenly spaced tick values on a 1/2/5 step, within the axis range.
    pub(crate) fn ticks(self) -> Vec<f64> {
        let step = nice_step(self.span() / TARGET_TICKS);

        let mut ticks = Vec::new();
        let mut tick = (self.min / step).ceil() * step;

        while tick <= self.max {
            ticks.push(tick);
            tick += step;
        }

        ticks
    }
}

fn nice_step(raw: f64) -> f64 {
    let magnitude = 10_f64.powf(raw.log10().floor());
    let normalised = raw / magnitude;

    let nice = if normalised <= 1.0 {
        1.0
    } else if normalised <= 2.0 {
        2.0
    } else if normalised <= 5.0 {
        5.0
    } else {
        10.0
    };

    nice * magnitude
}

/// One positioned bar.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Bar {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bar {
    fn label_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

/// Bars and axis for a full chart.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ChartLayout {
    pub axis: ValueAxis,
    pub bars: Vec<Bar>,
}

impl ChartLayout {
    pub(crate) fn new(levels: &StockLevels) -> Self {
        let axis = ValueAxis::covering(levels.entries().map(|(_, value)| value));

        let count = levels.entries().count();
        let plot_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;

        #[expect(
            clippy::cast_precision_loss,
            reason = "product counts stay far below the f64 mantissa"
        )]
        let band = plot_width / count.max(1) as f64;

        let width = band * BAR_FILL_RATIO;
        let inset = (band - width) / 2.0;

        let mut left = MARGIN_LEFT;

        let bars = levels
            .entries()
            .map(|(label, value)| {
                let top = axis.y_of(value.max(0.0));
                let bar = Bar {
                    label: label.to_string(),
                    x: left + inset,
                    y: top,
                    width,
                    height: axis.y_of(value.min(0.0)) - top,
                };

                left += band;

                bar
            })
            .collect();

        Self { axis, bars }
    }

    fn baseline(&self) -> f64 {
        self.axis.y_of(0.0)
    }
}

fn coord(value: f64) -> String {
    format!("{value:.2}")
}

/// Bar chart of net stock per product.
#[component]
pub(crate) fn BarChart(
    /// Stock levels to plot, one bar per product.
    levels: StockLevels,
) -> impl IntoView {
    let layout = ChartLayout::new(&levels);
    let baseline = coord(layout.baseline());
    let axis = layout.axis;

    let ticks = axis
        .ticks()
        .into_iter()
        .map(|tick| {
            let y = coord(axis.y_of(tick));

            view! {
                <g class="chart-tick">
                    <line
                        x1=coord(MARGIN_LEFT)
                        x2=coord(WIDTH - MARGIN_RIGHT)
                        y1=y.clone()
                        y2=y.clone()
                        stroke="#e2e8f0"
                        stroke-width="1"
                    ></line>
                    <text
                        x=coord(MARGIN_LEFT - 8.0)
                        y=y
                        text-anchor="end"
                        dominant-baseline="middle"
                        font-size="11"
                        fill="#475569"
                    >
                        {tick.to_string()}
                    </text>
                </g>
            }
        })
        .collect_view();

    let bars = layout
        .bars
        .into_iter()
        .map(|bar| {
            let label_x = coord(bar.label_x());

            view! {
                <g class="chart-bar">
                    <rect
                        x=coord(bar.x)
                        y=coord(bar.y)
                        width=coord(bar.width)
                        height=coord(bar.height)
                        fill=BAR_FILL
                        stroke=BAR_BORDER
                        stroke-width="1"
                    ></rect>
                    <text
                        x=label_x
                        y=coord(HEIGHT - MARGIN_BOTTOM + 16.0)
                        text-anchor="middle"
                        font-size="12"
                        fill="#0f172a"
                    >
                        {bar.label}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox=format!("0 0 {WIDTH} {HEIGHT}")
            role="img"
            aria-label="Stock level per product"
            class="stock-chart"
        >
            <g class="chart-legend">
                <rect
                    x=coord(MARGIN_LEFT)
                    y="8"
                    width="32"
                    height="12"
                    fill=BAR_FILL
                    stroke=BAR_BORDER
                    stroke-width="1"
                ></rect>
                <text x=coord(MARGIN_LEFT + 40.0) y="18" font-size="12" fill="#0f172a">
                    {SERIES_LABEL}
                </text>
            </g>
            {ticks}
            {bars}
            <line
                x1=coord(MARGIN_LEFT)
                x2=coord(WIDTH - MARGIN_RIGHT)
                y1=baseline.clone()
                y2=baseline
                stroke="#64748b"
                stroke-width="1"
            ></line>
        </svg>
    }
}
