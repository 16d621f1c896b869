//! SVG history chart rendering.

use std::sync::Arc;

use crate::application::services::StatsService;
use crate::error::AppError;
use chrono::NaiveDate;
use serde_json::json;

/// Renders usage history as SVG line charts with `plotters`.
///
/// Every render walks all snapshots through [`StatsService`], so the chart
/// routes sit behind the rate limiter.
pub struct ChartService {
    stats: Arc<StatsService>,
}

impl ChartService {
    pub fn new(stats: Arc<StatsService>) -> Self {
        Self { stats }
    }

    /// Chart of total shortened URLs over time.
    pub async fn totals_chart(&self) -> Result<String, AppError> {
        self.render(None).await
    }

    /// Totals chart with an overlay of one hostname's counts.
    ///
    /// The overlay is omitted when the hostname never appears in any
    /// snapshot; the totals series is still drawn.
    pub async fn domain_chart(&self, domain: &str) -> Result<String, AppError> {
        self.render(Some(domain)).await
    }

    async fn render(&self, domain: Option<&str>) -> Result<String, AppError> {
        let totals = self.stats.total_history().await?;
        if totals.is_empty() {
            return Err(AppError::not_found("No statistics extracted yet", json!({})));
        }

        let overlay = match domain {
            Some(host) => Some(self.stats.domain_history(host).await?),
            None => None,
        };

        draw_line_chart(&totals, overlay.as_deref()).map_err(|e| {
            AppError::internal("Chart rendering failed", json!({ "error": e.to_string() }))
        })
    }
}

/// Draws the totals series (blue) and an optional per-domain overlay (green)
/// into an SVG string.
fn draw_line_chart(
    totals: &[(NaiveDate, i64)],
    overlay: Option<&[(NaiveDate, i64)]>,
) -> anyhow::Result<String> {
    use plotters::prelude::*;

    let mut buf = String::new();
    {
        let start_date = totals[0].0;
        let end_date = totals[totals.len() - 1].0;
        let final_total = totals[totals.len() - 1].1 as f32;

        let root_area = SVGBackend::with_string(&mut buf, (900, 300)).into_drawing_area();
        root_area.fill(&WHITE)?;

        let mut ctx = ChartBuilder::on(&root_area)
            .set_label_area_size(LabelAreaPosition::Left, 60)
            .set_label_area_size(LabelAreaPosition::Bottom, 60)
            // Y runs to 105% of the final total so the last point isn't
            // clipped at the top edge.
            .build_cartesian_2d(start_date..end_date, 0.0..final_total * 1.05)?;

        ctx.configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .x_desc("Date")
            .y_desc("Shortened URLs")
            .draw()?;

        ctx.draw_series(LineSeries::new(
            totals.iter().map(|(date, total)| (*date, *total as f32)),
            &BLUE,
        ))?;

        if let Some(points) = overlay
            && !points.is_empty()
        {
            ctx.draw_series(LineSeries::new(
                points.iter().map(|(date, count)| (*date, *count as f32)),
                &GREEN,
            ))?;
        }

        root_area.present()?;
    }

    Ok(buf)
}
