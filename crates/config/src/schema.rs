use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `sccs.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SccsConfig {
    /// JSON-RPC endpoint and account selection.
    pub network: NetworkConfig,
    /// Deployed contract addresses.
    pub contracts: ContractsConfig,
    /// Rate polling behaviour.
    pub rate: RateConfig,
    /// Rate chart geometry.
    pub chart: ChartConfig,
    /// Swap transaction parameters.
    pub swap: SwapConfig,
    /// Theme / visual settings.
    pub theme: ThemeConfig,
}

/// Node connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// HTTP JSON-RPC endpoint.
    pub rpc_url: String,
    /// Chain id the node must report; connecting to any other chain fails.
    pub chain_id: u64,
    /// Node-managed account to send from.  `None` = first account.
    pub account: Option<Address>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            rpc_url:  "http://127.0.0.1:8545".to_string(), // local Anvil
            chain_id: 31_337,
            account:  None,
        }
    }
}

/// Addresses of the pre-deployed contracts.  Zero = not configured.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ContractsConfig {
    pub hkdc:   Address,
    pub sgdc:   Address,
    pub oracle: Address,
    pub fx:     Address,
}

/// Rate feed settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RateConfig {
    /// Delay between oracle polls.
    pub poll_interval_ms: u64,
    /// Attempts per poll before the reading is skipped.
    pub max_attempts: u32,
    /// Delay before the first retry; doubles on each further attempt.
    pub retry_backoff_ms: u64,
    /// Number of samples kept for the chart.
    pub history: usize,
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 30_000,
            max_attempts:     3,
            retry_backoff_ms: 500,
            history:          50,
        }
    }
}

/// Rate chart settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Raster width in pixels.
    pub width: u32,
    /// Raster height in pixels.
    pub height: u32,
    /// Grid-snap granularity in pixels.
    pub grid: u32,
    /// Inset of the plotted line from every edge.
    pub padding: u32,
    /// Prefix of the top-left label.
    pub pair_label: String,
    /// Decimal places shown in the label.
    pub decimals: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width:      600,
            height:     260,
            grid:       6,
            padding:    10,
            pair_label: "Rate SGD/HKD".to_string(),
            decimals:   6,
        }
    }
}

/// Swap transaction parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SwapConfig {
    /// Oldest oracle reading (seconds) the FX contract may price against.
    pub max_age_secs: u64,
    /// Minimum acceptable output, as a decimal token amount.
    pub min_out: String,
}

impl Default for SwapConfig {
    fn default() -> Self {
        Self {
            max_age_secs: 600,
            min_out:      "0".to_string(),
        }
    }
}

/// Theme / styling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Window background color (hex, e.g. `"#03050a"`).
    pub background: String,
    /// Primary text/foreground color.
    pub foreground: String,
    /// Accent / highlight color.
    pub accent: String,
    /// Panel (card) background.
    pub panel: String,
    /// Input field background.
    pub input: String,
    /// Error notice color.
    pub error: String,
    /// Font size in points.
    pub font_size: f32,
    /// Corner radius for panels (pixels).
    pub border_radius: f32,
    /// Inner padding of each panel (pixels).
    pub padding: u16,
    /// Gap between panels (pixels).
    pub gap: u16,
    /// `strftime` format string for the clock time display.
    pub clock_format: String,
    /// `strftime` format string for the clock date display.
    pub date_format: String,
    /// Chart background.
    pub chart_background: String,
    /// Chart grid lines (usually translucent).
    pub chart_grid: String,
    /// Chart line and glow.
    pub chart_line: String,
    /// Chart label text.
    pub chart_label: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background:       "#03050a".to_string(),
            foreground:       "#ffffff".to_string(),
            accent:           "#a3e635".to_string(), // lime-400
            panel:            "#000000".to_string(),
            input:            "#0a1118".to_string(),
            error:            "#ff6b6b".to_string(),
            font_size:        14.0,
            border_radius:    16.0,
            padding:          16,
            gap:              24,
            clock_format:     "%H:%M:%S".to_string(),
            date_format:      "%Y-%m-%d".to_string(),
            chart_background: "#06090e".to_string(),
            chart_grid:       "#50ff780d".to_string(), // rgba(80, 255, 120, 0.05)
            chart_line:       "#78ff78".to_string(),
            chart_label:      "#a6ffb0".to_string(),
        }
    }
}
