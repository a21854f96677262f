use crate::shared::date_utils::format_thousands;
use crate::shared::icons::icon;
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;

fn format_value(val: f64, fmt: &ValueFormat) -> String {
    match fmt {
        ValueFormat::Money { currency } => {
            let abs = val.abs();
            let formatted = if abs >= 1_000_000.0 {
                format!("{:.1}M", val / 1_000_000.0)
            } else if abs >= 1_000.0 {
                let cents = (abs * 100.0).round() as u64;
                let whole = cents / 100;
                let frac = cents % 100;
                let sign = if val < 0.0 { "-" } else { "" };
                if frac == 0 {
                    format!("{}{}", sign, format_thousands(whole))
                } else {
                    format!("{}{}.{:02}", sign, format_thousands(whole), frac)
                }
            } else {
                format!("{:.2}", val)
            };
            format!("{}{}", currency, formatted)
        }
        ValueFormat::Number { decimals } => {
            format!("{:.prec$}", val, prec = *decimals as usize)
        }
        ValueFormat::Percent { decimals } => {
            format!("{:.prec$}%", val, prec = *decimals as usize)
        }
        ValueFormat::Integer => format_thousands(val.max(0.0).round() as u64),
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Primary numeric value (None = loading/error)
    #[prop(into)]
    value: Signal<Option<f64>>,
    /// How to format the value
    format: ValueFormat,
    /// Visual status
    #[prop(into)]
    status: Signal<IndicatorStatus>,
    /// Change % relative to previous period
    #[prop(into)]
    change_percent: Signal<Option<f64>>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let format_clone = format.clone();

    let status_class = move || match status.get() {
        IndicatorStatus::Good => "stat-card stat-card--success",
        IndicatorStatus::Bad => "stat-card stat-card--error",
        IndicatorStatus::Warning => "stat-card stat-card--warning",
        IndicatorStatus::Neutral => "stat-card",
    };

    let formatted = move || match value.get() {
        Some(v) => format_value(v, &format_clone),
        None => "—".to_string(),
    };

    let change_view = move || {
        change_percent.get().map(|pct| {
            let (arrow, cls) = if pct > 0.5 {
                ("\u{2191}", "stat-card__change stat-card__change--up")
            } else if pct < -0.5 {
                ("\u{2193}", "stat-card__change stat-card__change--down")
            } else {
                ("", "stat-card__change stat-card__change--flat")
            };
            let text = format!("{}{:.1}%", arrow, pct.abs());
            view! { <span class=cls>{text}</span> }
        })
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class=status_class>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {formatted}
                    {change_view}
                </div>
                {subtitle_view}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_formatting() {
        let usd = ValueFormat::Money {
            currency: "$".to_string(),
        };
        assert_eq!(format_value(42.5, &usd), "$42.50");
        assert_eq!(format_value(1_234.0, &usd), "$1,234");
        assert_eq!(format_value(1_234.56, &usd), "$1,234.56");
        assert_eq!(format_value(2_500_000.0, &usd), "$2.5M");
    }

    #[test]
    fn integer_and_percent_formatting() {
        assert_eq!(format_value(3427.0, &ValueFormat::Integer), "3,427");
        assert_eq!(
            format_value(12.34, &ValueFormat::Percent { decimals: 1 }),
            "12.3%"
        );
        assert_eq!(
            format_value(0.5, &ValueFormat::Number { decimals: 2 }),
            "0.50"
        );
    }
}
