use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, LineStyle, LineStyleType,
        SplitLine, TextStyle, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::Bar,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::Config;
use crate::models::{climate::ClimateSnapshot, error::AppError};
use crate::utils::debounce::on_resize_settled;

const SERIES_NAME: &str = "Average Temperature (°C)";
const BAR_COLOR: &str = "rgba(54, 162, 235, 0.6)";
const TITLE_COLOR: &str = "#1f2937";
const AXIS_COLOR: &str = "#6b7280";
const GRID_COLOR: &str = "#e5e7eb";

#[wasm_bindgen]
extern "C" {
    /// `echarts.dispose(element)`: tears down whatever instance is bound to
    /// `element`. A no-op when there is none.
    #[wasm_bindgen(js_namespace = echarts, js_name = dispose)]
    fn dispose_echarts(element: &HtmlElement);
}

/// Somewhere a chart can be drawn and torn down again.
pub trait ChartSurface {
    /// Whether a chart drawn now would be visible (the container has a size).
    fn has_room(&self) -> bool;

    fn draw(&mut self, chart: &CharmingChart) -> Result<(), AppError>;

    fn dispose(&mut self);
}

/// Sole owner of the chart instance on a surface.
///
/// `replace` disposes the current instance before drawing the next one and
/// dropping the slot disposes whatever is left, so there is never more than
/// one instance alive.
pub struct ChartSlot<S: ChartSurface> {
    surface: S,
    live: bool,
}

impl<S: ChartSurface> ChartSlot<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            live: false,
        }
    }

    /// Swaps in `chart`. With no room to draw, the current chart is left
    /// untouched.
    pub fn replace(&mut self, chart: &CharmingChart) -> Result<(), AppError> {
        if !self.surface.has_room() {
            return Err(AppError::DataError(
                "Chart container has no size yet".to_string(),
            ));
        }

        self.clear();
        self.surface.draw(chart)?;
        self.live = true;
        Ok(())
    }

    pub fn clear(&mut self) {
        if self.live {
            self.surface.dispose();
            self.live = false;
        }
    }

    pub fn is_live(&self) -> bool {
        self.live
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

impl<S: ChartSurface> Drop for ChartSlot<S> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// ECharts instance living in the DOM, sized from its container.
pub struct EchartsSurface {
    container: HtmlElement,
    target: HtmlElement,
}

impl EchartsSurface {
    pub fn new(container: HtmlElement, target: HtmlElement) -> Self {
        Self { container, target }
    }
}

impl ChartSurface for EchartsSurface {
    fn has_room(&self) -> bool {
        self.container.client_width() > 0 && self.container.client_height() > 0
    }

    fn draw(&mut self, chart: &CharmingChart) -> Result<(), AppError> {
        let width = self.container.client_width().cast_unsigned();
        let height = self.container.client_height().cast_unsigned();

        WasmRenderer::new(width, height)
            .render(Config::CHART_ID, chart)
            .map(|_| ())
            .map_err(|e| AppError::DataError(format!("Render error: {e:?}")))
    }

    fn dispose(&mut self) {
        dispose_echarts(&self.target);
    }
}

type SharedSlot = Rc<RefCell<Option<ChartSlot<EchartsSurface>>>>;

#[derive(Properties, PartialEq)]
pub struct TemperatureChartProps {
    pub snapshot: Rc<ClimateSnapshot>,
    /// Changes whenever `snapshot` is a fresh fetch
    pub revision: u64,
}

#[function_component(TemperatureChart)]
pub fn temperature_chart(props: &TemperatureChartProps) -> Html {
    let container_ref = use_node_ref();
    let target_ref = use_node_ref();
    let slot: SharedSlot = use_mut_ref(|| None);
    let latest = use_mut_ref(|| props.snapshot.clone());

    // Effect: draw each new snapshot, replacing the previous chart
    {
        let slot = slot.clone();
        let latest = latest.clone();
        let container_ref = container_ref.clone();
        let target_ref = target_ref.clone();
        let snapshot = props.snapshot.clone();

        use_effect_with(props.revision, move |_| {
            *latest.borrow_mut() = snapshot.clone();

            if let (Some(container), Some(target)) = (
                container_ref.cast::<HtmlElement>(),
                target_ref.cast::<HtmlElement>(),
            ) {
                slot.borrow_mut()
                    .get_or_insert_with(|| ChartSlot::new(EchartsSurface::new(container, target)));
                redraw(&slot, &snapshot);
            }

            || ()
        });
    }

    // Effect: redraw after resizing; dispose the chart on unmount
    {
        let slot = slot.clone();

        use_effect_with((), move |_| {
            let listener = {
                let slot = slot.clone();
                on_resize_settled(Config::RESIZE_DEBOUNCE_MS, move || {
                    let snapshot = latest.borrow().clone();
                    redraw(&slot, &snapshot);
                })
            };

            move || {
                drop(listener);
                slot.borrow_mut().take();
            }
        });
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={Config::CHART_ID} ref={target_ref} />
        </div>
    }
}

fn redraw(slot: &SharedSlot, snapshot: &ClimateSnapshot) {
    if let Some(slot) = slot.borrow_mut().as_mut() {
        if let Err(e) = slot.replace(&build_chart(snapshot)) {
            gloo::console::warn!(&format!("Chart not drawn: {e}"));
        }
    }
}

/// One bar per region, in the order the server listed them.
pub fn build_chart(snapshot: &ClimateSnapshot) -> CharmingChart {
    let (regions, temperatures) = snapshot.series_data();

    CharmingChart::new()
        .title(
            Title::new()
                .text("Average Temperature by Region")
                .left("center")
                .text_style(TextStyle::new().font_size(16).color(TITLE_COLOR)),
        )
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("12%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(regions)
                .axis_label(AxisLabel::new().color(AXIS_COLOR)),
        )
        // A value axis always spans zero unless `scale` is set, so bars grow from 0 °C
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("°C")
                .axis_label(AxisLabel::new().color(AXIS_COLOR))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(GRID_COLOR)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        )
        .series(
            Bar::new()
                .name(SERIES_NAME)
                .data(temperatures)
                .bar_width("60%")
                .item_style(ItemStyle::new().color(BAR_COLOR)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts chart instances the way ECharts would hold them.
    #[derive(Default)]
    struct CountingSurface {
        alive: u32,
        draws: u32,
        disposals: u32,
        fail_next: bool,
        collapsed: bool,
    }

    impl ChartSurface for CountingSurface {
        fn has_room(&self) -> bool {
            !self.collapsed
        }

        fn draw(&mut self, _chart: &CharmingChart) -> Result<(), AppError> {
            if self.fail_next {
                self.fail_next = false;
                return Err(AppError::DataError("no size".to_string()));
            }
            self.alive += 1;
            self.draws += 1;
            Ok(())
        }

        fn dispose(&mut self) {
            self.alive -= 1;
            self.disposals += 1;
        }
    }

    #[test]
    fn test_replace_keeps_single_instance() {
        let mut slot = ChartSlot::new(CountingSurface::default());

        slot.replace(&CharmingChart::new()).unwrap();
        slot.replace(&CharmingChart::new()).unwrap();

        assert_eq!(slot.surface().alive, 1);
        assert_eq!(slot.surface().draws, 2);
        assert_eq!(slot.surface().disposals, 1);
        assert!(slot.is_live());
    }

    #[test]
    fn test_failed_draw_leaves_nothing_alive() {
        let mut slot = ChartSlot::new(CountingSurface::default());
        slot.replace(&CharmingChart::new()).unwrap();

        slot.surface.fail_next = true;
        assert!(slot.replace(&CharmingChart::new()).is_err());

        assert_eq!(slot.surface().alive, 0);
        assert!(!slot.is_live());

        // Clearing an empty slot must not dispose twice
        slot.clear();
        assert_eq!(slot.surface().disposals, 1);
    }

    #[test]
    fn test_collapsed_container_keeps_last_chart() {
        let mut slot = ChartSlot::new(CountingSurface::default());
        slot.replace(&CharmingChart::new()).unwrap();

        slot.surface.collapsed = true;
        assert!(slot.replace(&CharmingChart::new()).is_err());

        assert_eq!(slot.surface().alive, 1);
        assert_eq!(slot.surface().disposals, 0);
        assert!(slot.is_live());

        // Redraw once the container has a size again
        slot.surface.collapsed = false;
        slot.replace(&CharmingChart::new()).unwrap();
        assert_eq!(slot.surface().alive, 1);
        assert_eq!(slot.surface().draws, 2);
    }

    #[test]
    fn test_build_chart_with_unreadable_reading() {
        use crate::models::climate::RegionReading;

        let snapshot = ClimateSnapshot::new(
            vec![
                RegionReading {
                    region: "North".to_string(),
                    celsius: 15.5,
                },
                RegionReading {
                    region: "West".to_string(),
                    celsius: f64::NAN,
                },
            ],
            vec![],
        );

        // Building must not panic on NaN
        let _chart = build_chart(&snapshot);
    }
}
