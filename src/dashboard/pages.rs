use crate::models::finding::Finding;
use super::data::*;
use super::model::{Block, Page, PageId, PieChart, Section};

/// Build the full content of one page.
pub fn page(id: PageId) -> Page {
    let (title, sections) = match id {
        PageId::Overview => ("Q3 2025 Marketing Performance Audit", overview()),
        PageId::Analytics => ("Insights & Recommendations", analytics()),
        PageId::October => ("October Plan", october()),
        PageId::DevChecklist => ("Developer Tracking Checklist", dev_checklist()),
    };
    Page { id, label: id.label(), title, sections }
}

pub fn all_pages() -> Vec<Page> {
    PageId::ALL.into_iter().map(page).collect()
}

/// Observations fed to the executive summary card on the overview page.
pub fn dashboard_findings() -> Vec<Finding> {
    vec![
        Finding::positive("Cost-per-lead fell 17.9% month over month in August; Meta reached its best CPL at $4.44 in September."),
        Finding::positive("MAU grew 41% quarter over quarter to 1.7k with new-user conversion improving to 14.2%."),
        Finding::positive("Roughly 15K SGD of ad spend produced 166K SGD GMV, an 11x blended ROAS."),
        Finding::improvement("XHS CTR declined from 5.3% to 4.2% while CPC rose to $0.31, signalling creative fatigue."),
        Finding::improvement("Direct-to-package flows convert 2x better than multi-step flows; coach and package detail pages are the main drop-off."),
        Finding::critical("AOV dropped 12% to $266 in September, pulling GMV down 4.8% month over month."),
        Finding::critical("WhatsApp and website conversions are untracked, so ROAS is underreported and budget may be misallocated."),
    ]
}

fn overview() -> Vec<Section> {
    vec![
        Section::new("Executive Overview", paragraphs(EXECUTIVE_OVERVIEW)),
        Section::new(
            "1. Platform & Marketing Performance Summary",
            vec![Block::Table(PLATFORM_PERFORMANCE), Block::Takeaway { text: PLATFORM_PERFORMANCE_TOTAL }],
        ),
        Section::new(
            "2. User & Revenue Trends",
            vec![Block::Table(USER_REVENUE_TRENDS), Block::Takeaway { text: USER_REVENUE_TAKEAWAY }],
        ),
        Section::new(
            "3. Advertising Channel Breakdown",
            vec![
                Block::Heading { text: "Xiaohongshu (XHS)" },
                Block::Bullets { items: XHS_CHANNEL },
                Block::Takeaway { text: XHS_INTERPRETATION },
                Block::Heading { text: "Meta (IG + FB)" },
                Block::Bullets { items: META_CHANNEL },
                Block::Takeaway { text: META_INTERPRETATION },
            ],
        ),
        Section::new(
            "4. Funnel & App Performance",
            vec![Block::Table(FUNNEL_PERFORMANCE), Block::Takeaway { text: FUNNEL_TAKEAWAY }],
        ),
        Section::new(
            "5. Sports Category Demand",
            vec![
                Block::Table(SPORTS_DEMAND),
                Block::Pie(PieChart::from_table(&SPORTS_DEMAND, 1, 2, PIE_COLORS)),
            ],
        ),
        Section::new("6. Cost & Efficiency Indicators", vec![Block::Bullets { items: COST_EFFICIENCY }]),
        Section::new(
            "7. Fragmented Funnel",
            vec![
                Block::Bullets { items: FRAGMENTED_FUNNEL_FLOWS },
                Block::Paragraph { text: FRAGMENTED_FUNNEL_EXPLANATION },
                Block::Heading { text: "Risks" },
                Block::Bullets { items: FRAGMENTED_FUNNEL_RISKS },
            ],
        ),
    ]
}

fn analytics() -> Vec<Section> {
    vec![
        Section::new("Short-Term (Next 30 Days)", vec![Block::Bullets { items: SHORT_TERM_INSIGHTS }]),
        Section::new("Mid-Term (Q4 2025)", vec![Block::Bullets { items: MID_TERM_INSIGHTS }]),
        Section::new("Budget Allocation", vec![Block::Table(BUDGET_ALLOCATION)]),
        Section::new(
            "Current Funnel Reality",
            vec![
                Block::Paragraph { text: CURRENT_FLOW },
                Block::Table(TRACKING_GAPS),
                Block::Takeaway { text: TRACKING_GAPS_RESULT },
            ],
        ),
        Section::new(
            "Non-Negotiable Tracking Integrations",
            vec![
                Block::Paragraph { text: TRACKING_INTRO },
                Block::Table(TRACKING_NON_NEGOTIABLES),
                Block::Heading { text: "Install & App Event Attribution" },
                Block::Bullets { items: INSTALL_ATTRIBUTION_STEPS },
                Block::Heading { text: "Conversion & Revenue Tracking" },
                Block::Bullets { items: REVENUE_TRACKING_STEPS },
            ],
        ),
        Section::new("Metrics Unlocked", vec![Block::Table(UNLOCKED_METRICS)]),
        Section::new("Optional Add-ons", vec![Block::Table(OPTIONAL_ADDONS)]),
        Section::new(
            "Website & WhatsApp Strategy",
            vec![
                Block::Heading { text: "Google Tag Manager" },
                Block::Bullets { items: GTM_STEPS },
                Block::Heading { text: "WhatsApp" },
                Block::Bullets { items: WHATSAPP_STEPS },
                Block::Takeaway { text: AI_CHAT_NOTE },
            ],
        ),
    ]
}

fn october() -> Vec<Section> {
    vec![
        Section::new("Proposal Files", vec![Block::Links { links: PROPOSAL_FILES }]),
        Section::new("Brand Optimisation", vec![Block::Table(BRAND_OPTIMISATION)]),
        Section::new(
            "Content Engine",
            vec![Block::Table(CONTENT_ENGINE), Block::Takeaway { text: CONTENT_ENGINE_GOAL }],
        ),
    ]
}

fn dev_checklist() -> Vec<Section> {
    vec![
        Section::new("Goal", vec![Block::Paragraph { text: DEV_GOAL }]),
        Section::new(
            "1. Multi-Channel Attribution",
            vec![Block::Table(MULTI_CHANNEL_ATTRIBUTION), Block::Takeaway { text: MULTI_CHANNEL_RESULT }],
        ),
        Section::new(
            "2. Firebase Event Tracking",
            vec![Block::Table(FIREBASE_EVENTS), Block::Bullets { items: FIREBASE_NOTES }],
        ),
        Section::new("3. Stripe Revenue Link", vec![Block::Bullets { items: STRIPE_LINK }]),
        Section::new("4. Website Analytics", vec![Block::Table(WEBSITE_ANALYTICS)]),
        Section::new("5. WhatsApp Funnel", vec![Block::Bullets { items: WHATSAPP_FUNNEL }]),
        Section::new(
            "6. Push & Homepage Banners",
            vec![Block::Paragraph { text: BANNER_PROBLEM }, Block::Bullets { items: BANNER_SOLUTION }],
        ),
        Section::new("7. Heatmap & UX", vec![Block::Bullets { items: HEATMAP_UX }]),
        Section::new("8. GA4 / Looker Studio Dashboard", vec![Block::Bullets { items: LOOKER_METRICS }]),
        Section::new("9. QA & Validation", vec![Block::Bullets { items: QA_VALIDATION }]),
        Section::new("Outcome", vec![Block::Bullets { items: SETUP_OUTCOME }]),
    ]
}

fn paragraphs(texts: &'static [&'static str]) -> Vec<Block> {
    texts.iter().map(|&text| Block::Paragraph { text }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::finding::FindingCategory;

    #[test]
    fn test_every_page_has_sections() {
        for page in all_pages() {
            assert!(!page.sections.is_empty(), "{} has no sections", page.id);
            assert_eq!(page.label, page.id.label());
        }
    }

    #[test]
    fn test_table_rows_match_header_width() {
        for page in all_pages() {
            for section in &page.sections {
                for block in &section.blocks {
                    if let Block::Table(table) = block {
                        for row in table.rows {
                            assert_eq!(row.len(), table.headers.len(), "row width in '{}'", section.title);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_sports_pie() {
        let overview = page(PageId::Overview);
        let pie = overview
            .sections
            .iter()
            .flat_map(|s| s.blocks.iter())
            .find_map(|b| match b {
                Block::Pie(p) => Some(p.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(pie.slices.len(), 5);
        assert_eq!(pie.slices[0].name, "Tennis");
        assert_eq!(pie.slices[0].value, 43.0);
        assert_eq!(pie.slices[0].color, "#0d48a2");
        assert_eq!(pie.slices[4].color, "#808080");
        assert_eq!(pie.total(), 88.0);
    }

    #[test]
    fn test_october_links() {
        let october = page(PageId::October);
        let Block::Links { links } = &october.sections[0].blocks[0] else {
            panic!("expected links block");
        };
        assert_eq!(links.len(), 2);
        assert!(links.iter().all(|l| l.url.starts_with("https://drive.google.com/")));
    }

    #[test]
    fn test_dashboard_findings_cover_all_categories() {
        let findings = dashboard_findings();
        for category in [FindingCategory::Positive, FindingCategory::Improvement, FindingCategory::Critical] {
            assert!(findings.iter().any(|f| f.category == category));
        }
    }
}
