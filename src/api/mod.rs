mod chart_config;
mod layout_pass;
mod layout_result;
mod legend;
mod render_frame_builder;

use std::time::Instant;

use tracing::{debug, warn};

use crate::core::{
    AnimationDriver, AnimationState, Dataset, DatasetToken, EstimatedTextMeasurer, TextMeasurer,
    Viewport, validate_dataset,
};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

pub use chart_config::BarChartConfig;
pub use layout_result::{LabelPlacement, LabelRole, LayoutResult};
pub use legend::{ChartSection, LegendEntry, LegendPosition, legend_entries};

/// Bar chart engine bound to one chart instance.
///
/// The caller owns the dataset and passes it by reference every frame; the
/// engine keeps a copy only to notice when a different dataset arrives, which
/// revalidates it and restarts the reveal animation. Layout is pull-based:
/// the host's render loop calls [`BarChart::current_layout`] or
/// [`BarChart::render`] with a monotonic timestamp whenever it draws.
///
/// The animation state is the only thing mutated across frames, so one
/// engine must not be shared between concurrently rendered charts.
pub struct BarChart<R: Renderer, M: TextMeasurer = EstimatedTextMeasurer> {
    renderer: R,
    measurer: M,
    config: BarChartConfig,
    animation: AnimationDriver,
    bound: Option<Dataset>,
}

impl<R: Renderer> BarChart<R> {
    pub fn new(renderer: R, config: BarChartConfig) -> ChartResult<Self> {
        Self::with_text_measurer(renderer, EstimatedTextMeasurer, config)
    }
}

impl<R: Renderer, M: TextMeasurer> BarChart<R, M> {
    pub fn with_text_measurer(renderer: R, measurer: M, config: BarChartConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            measurer,
            config,
            animation: AnimationDriver::new(config.animation_timings()),
            bound: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &BarChartConfig {
        &self.config
    }

    #[must_use]
    pub fn text_measurer(&self) -> &M {
        &self.measurer
    }

    /// `None` until a dataset has been bound.
    #[must_use]
    pub fn animation_state(&self) -> Option<AnimationState> {
        self.animation.state()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_running()
    }

    #[must_use]
    pub fn bound_dataset(&self) -> Option<&Dataset> {
        self.bound.as_ref()
    }

    /// Validates `dataset` and makes it the bound one, restarting the animation.
    ///
    /// An invalid dataset leaves the previous binding untouched.
    pub fn bind_dataset(&mut self, dataset: &Dataset) -> ChartResult<DatasetToken> {
        if let Err(err) = validate_dataset(dataset) {
            warn!(error = %err, "reject dataset");
            return Err(err);
        }

        self.bound = Some(dataset.clone());
        let token = self.animation.bind();
        debug!(
            ?token,
            series = dataset.series_count(),
            categories = dataset.category_count(),
            "bind dataset"
        );
        Ok(token)
    }

    /// Samples the chart at `now`: rebinds when `dataset` differs from the
    /// bound one, advances the animation and lays the frame out.
    pub fn current_layout(
        &mut self,
        dataset: &Dataset,
        viewport: Viewport,
        now: Instant,
    ) -> ChartResult<LayoutResult> {
        ensure_viewport(viewport)?;
        if self.bound.as_ref() != Some(dataset) {
            self.bind_dataset(dataset)?;
        }

        let progress = self.animation.advance(now);
        Ok(self.compute_layout(dataset, viewport, progress))
    }

    /// Lays `dataset` out at a fixed animation progress without touching the
    /// engine state.
    pub fn layout_with_progress(
        &self,
        dataset: &Dataset,
        viewport: Viewport,
        progress: f64,
    ) -> ChartResult<LayoutResult> {
        ensure_viewport(viewport)?;
        validate_dataset(dataset)?;
        Ok(self.compute_layout(dataset, viewport, progress))
    }

    /// Lays the frame out at `now` and hands its draw commands to the renderer.
    pub fn render(
        &mut self,
        dataset: &Dataset,
        viewport: Viewport,
        now: Instant,
    ) -> ChartResult<LayoutResult> {
        let layout = self.current_layout(dataset, viewport, now)?;
        let frame = self.build_render_frame(&layout);
        self.renderer.render(&frame)?;
        Ok(layout)
    }

    #[must_use]
    pub fn legend_entries(&self, dataset: &Dataset) -> Vec<LegendEntry> {
        legend_entries(dataset)
    }

    /// Order in which the host stacks legend and chart body.
    #[must_use]
    pub fn section_order(&self) -> &'static [ChartSection] {
        self.config.legend_position.section_order()
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

fn ensure_viewport(viewport: Viewport) -> ChartResult<()> {
    if viewport.is_valid() {
        Ok(())
    } else {
        Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        })
    }
}
