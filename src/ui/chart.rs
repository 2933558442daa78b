//! Grouped bar chart for the weekly tracker view.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use super::theme::Theme;
use crate::app::APP_TITLE;
use crate::data::{Day, Series};

/// Bars carry integer heights; values are fixed-point scaled so fractional
/// entries (7.5 hours) stay proportional.
const VALUE_SCALE: f64 = 100.0;

/// Weekly grouped bar chart: one group per weekday, one bar per data point.
pub struct TrackerChart<'a> {
    series: &'a [Series],
    theme: &'a Theme,
}

impl<'a> TrackerChart<'a> {
    pub fn new(series: &'a [Series], theme: &'a Theme) -> Self {
        TrackerChart { series, theme }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(format!(" {APP_TITLE} "))
            .title_alignment(Alignment::Center)
            .title_top(
                Line::from(Span::styled(
                    " Amount ",
                    Style::default().add_modifier(Modifier::DIM),
                ))
                .right_aligned(),
            )
            .title_bottom(
                Line::from(Span::styled(
                    " Day ",
                    Style::default().add_modifier(Modifier::DIM),
                ))
                .centered(),
            )
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title_style(self.theme.title_style());

        let groups = day_groups(self.series);
        let mut chart = BarChart::default()
            .block(block)
            .bar_width(4)
            .bar_gap(1)
            .group_gap(3)
            .max(scaled_max(&groups));

        for (day, bars) in &groups {
            let bars: Vec<Bar> = bars
                .iter()
                .map(|&(series_idx, value)| {
                    Bar::default()
                        .value(scaled(value))
                        .text_value(format_amount(value))
                        .style(self.theme.series_style(series_idx))
                        .value_style(
                            self.theme
                                .series_style(series_idx)
                                .add_modifier(Modifier::REVERSED),
                        )
                })
                .collect();
            chart = chart.data(BarGroup::default().label(Line::from(day.name())).bars(&bars));
        }

        frame.render_widget(chart, area);
    }
}

/// Legend line pinned below the chart, one colored marker per series.
pub struct Legend<'a> {
    series: &'a [Series],
    theme: &'a Theme,
}

impl<'a> Legend<'a> {
    pub fn new(series: &'a [Series], theme: &'a Theme) -> Self {
        Legend { series, theme }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let mut spans: Vec<Span> = Vec::new();
        for (idx, series) in self.series.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::raw("   "));
            }
            spans.push(Span::styled("■ ", self.theme.series_style(idx)));
            spans.push(Span::styled(series.name.clone(), self.theme.normal_style()));
        }

        let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}

/// Collect (series index, value) pairs per weekday, in fixed axis order.
///
/// Every weekday yields a group even when it holds no points; a weekday with
/// repeated entries yields one bar per entry.
pub(crate) fn day_groups(series: &[Series]) -> Vec<(Day, Vec<(usize, f64)>)> {
    Day::ALL
        .iter()
        .map(|&day| {
            let bars = series
                .iter()
                .enumerate()
                .flat_map(|(idx, s)| {
                    s.points
                        .iter()
                        .filter(move |p| p.day == day)
                        .map(move |p| (idx, p.value))
                })
                .collect();
            (day, bars)
        })
        .collect()
}

/// Fixed-point bar height for a value. Negative entries clamp to zero height
/// (their printed value still shows the sign).
fn scaled(value: f64) -> u64 {
    (value.max(0.0) * VALUE_SCALE).round() as u64
}

/// Largest scaled bar height across all groups, at least 1 so an empty chart
/// still has a valid scale.
fn scaled_max(groups: &[(Day, Vec<(usize, f64)>)]) -> u64 {
    groups
        .iter()
        .flat_map(|(_, bars)| bars.iter())
        .map(|&(_, value)| scaled(value))
        .max()
        .unwrap_or(0)
        .max(1)
}

/// Compact decimal format for bar values and confirmation messages.
pub(crate) fn format_amount(value: f64) -> String {
    let text = format!("{value:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
