use serde::Serialize;

/// Identifies one of the four dashboard pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PageId {
    Overview,
    Analytics,
    October,
    DevChecklist,
}

impl PageId {
    pub const ALL: [PageId; 4] = [PageId::Overview, PageId::Analytics, PageId::October, PageId::DevChecklist];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Analytics => "analytics",
            Self::October => "october",
            Self::DevChecklist => "dev-checklist",
        }
    }

    /// Label shown in the navigation sidebar.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Analytics => "Analytics",
            Self::October => "Mth Oct",
            Self::DevChecklist => "Dev Checklist",
        }
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PageId {
    type Err = crate::errors::AuditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageId::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| crate::errors::AuditError::InvalidPage(s.to_string()))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Page {
    pub id: PageId,
    pub label: &'static str,
    pub title: &'static str,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub title: &'static str,
    pub blocks: Vec<Block>,
}

impl Section {
    pub fn new(title: &'static str, blocks: Vec<Block>) -> Self {
        Self { title, blocks }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Heading { text: &'static str },
    Paragraph { text: &'static str },
    Bullets { items: &'static [&'static str] },
    Table(Table),
    Pie(PieChart),
    /// Highlighted conclusion under a table or list.
    Takeaway { text: &'static str },
    Links { links: &'static [Link] },
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Table {
    pub headers: &'static [&'static str],
    pub rows: &'static [&'static [&'static str]],
}

#[derive(Debug, Clone, Serialize)]
pub struct Link {
    pub label: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub name: &'static str,
    pub value: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PieChart {
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    /// Colours cycle through `palette` when there are more slices than colours.
    pub fn from_values(values: &[(&'static str, f64)], palette: &'static [&'static str]) -> Self {
        let slices = values
            .iter()
            .enumerate()
            .map(|(i, (name, value))| PieSlice {
                name: *name,
                value: *value,
                color: palette.get(i % palette.len().max(1)).copied().unwrap_or("#808080"),
            })
            .collect();
        Self { slices }
    }

    /// Build a pie from one label column and one share column of a table.
    pub fn from_table(table: &Table, label_col: usize, value_col: usize, palette: &'static [&'static str]) -> Self {
        let values: Vec<(&'static str, f64)> = table
            .rows
            .iter()
            .filter_map(|row| Some((*row.get(label_col)?, parse_share(row.get(value_col)?))))
            .collect();
        Self::from_values(&values, palette)
    }

    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }
}

/// Leading numeric part of a share cell such as `"43 %"`, like JavaScript's
/// `parseFloat`. Returns 0.0 when the cell does not start with a number.
pub fn parse_share(cell: &str) -> f64 {
    let trimmed = cell.trim_start();
    let mut seen_dot = false;
    let end = trimmed
        .char_indices()
        .find(|&(i, c)| match c {
            '0'..='9' => false,
            '.' if !seen_dot => {
                seen_dot = true;
                false
            }
            '-' | '+' => i != 0,
            _ => true,
        })
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().unwrap_or(0.0)
}
