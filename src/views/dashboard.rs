//! Dashboard page
//!
//! Server-rendered HTML with two Chart.js charts. Chart data is embedded as
//! JSON; clicking a route bar reloads the trend chart from `/api/price-trend`.

use super::{escape_html, script_json};
use crate::config::CityTable;
use crate::models::DashboardPage;

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Flight Demand Dashboard</title>
<script src="https://cdn.jsdelivr.net/npm/chart.js"></script>
<style>
body { font-family: system-ui, sans-serif; margin: 0; background: #f4f6f8; color: #1f2933; }
header { background: #1f3a5f; color: #fff; padding: 1rem 2rem; }
main { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; padding: 1.5rem 2rem; }
section { background: #fff; border-radius: 8px; padding: 1rem 1.5rem; box-shadow: 0 1px 3px rgba(0,0,0,.1); }
section.wide { grid-column: 1 / -1; }
.empty { color: #7b8794; font-style: italic; }
</style>
</head>
<body>
<header>
<h1>Flight Demand Dashboard</h1>
<form method="post" action="/">
<label for="destination">Destination:</label>
<select id="destination" name="destination" onchange="this.form.submit()">
{{CITY_OPTIONS}}
</select>
<noscript><button type="submit">Update</button></noscript>
</form>
</header>
<main>
<section>
<h2>Average Price by Route (Tomorrow)</h2>
<canvas id="routesChart"></canvas>
<p id="routesEmpty" class="empty" hidden>No route data available.</p>
</section>
<section>
<h2 id="trendTitle">{{TREND_TITLE}}</h2>
<canvas id="trendChart"></canvas>
<p id="trendEmpty" class="empty" hidden>No trend data available.</p>
</section>
<section class="wide">
<h2>AI Market Insights</h2>
<div id="aiSummary">{{AI_SUMMARY}}</div>
</section>
</main>
<script>
const popularRoutes = {{POPULAR_ROUTES}};
const priceTrends = {{PRICE_TRENDS}};
const destination = {{DESTINATION}};

function hasData(series) {
  return series && Array.isArray(series.labels) && series.labels.length > 0;
}

const routesChart = hasData(popularRoutes) ? new Chart(document.getElementById('routesChart'), {
  type: 'bar',
  data: { labels: popularRoutes.labels, datasets: [{ label: 'Average price', data: popularRoutes.data }] },
  options: {
    onClick: (event, elements) => {
      if (!elements.length || !popularRoutes.origin_codes) return;
      loadTrend(popularRoutes.origin_codes[elements[0].index]);
    }
  }
}) : null;
if (!routesChart) document.getElementById('routesEmpty').hidden = false;

let trendChart = null;
function drawTrend(series, title) {
  document.getElementById('trendTitle').textContent = title;
  if (trendChart) { trendChart.destroy(); trendChart = null; }
  document.getElementById('trendEmpty').hidden = hasData(series);
  if (!hasData(series)) return;
  trendChart = new Chart(document.getElementById('trendChart'), {
    type: 'line',
    data: { labels: series.labels, datasets: [{ label: 'Cheapest price', data: series.data, tension: 0.2 }] }
  });
}
drawTrend(priceTrends, document.getElementById('trendTitle').textContent);

function loadTrend(origin) {
  document.getElementById('trendTitle').textContent = 'Loading trend for ' + origin + '...';
  const params = new URLSearchParams({ origin: origin, destination: destination });
  fetch('/api/price-trend?' + params)
    .then((response) => response.json())
    .then((body) => {
      if (body.error) { drawTrend(null, body.error); return; }
      drawTrend(body, body.chart_title);
    })
    .catch(() => drawTrend(null, 'Could not load trend data'));
}
</script>
</body>
</html>
"#;

/// Render the dashboard page
pub fn render_dashboard(page: &DashboardPage, cities: &CityTable) -> String {
    PAGE_TEMPLATE
        .replace("{{CITY_OPTIONS}}", &city_options(cities, &page.selected_destination))
        .replace("{{TREND_TITLE}}", &escape_html(&page.trend_chart_title))
        .replace("{{POPULAR_ROUTES}}", &script_json(&page.popular_routes))
        .replace("{{PRICE_TRENDS}}", &script_json(&page.price_trends))
        .replace("{{DESTINATION}}", &script_json(&page.selected_destination))
        // The summary is already an HTML fragment; substituted last so model
        // output cannot inject further placeholders
        .replace("{{AI_SUMMARY}}", &page.ai_summary)
}

fn city_options(cities: &CityTable, selected: &str) -> String {
    cities
        .cities()
        .iter()
        .map(|city| {
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                escape_html(&city.code),
                if city.code == selected { " selected" } else { "" },
                escape_html(&city.name)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
