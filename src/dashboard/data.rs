//! Q3 2025 audit figures and recommendations for WOW Coach.
//!
//! Every table, list and paragraph the dashboard shows lives here as a
//! constant. Nothing is computed at runtime except the pie slices.

use super::model::{Link, Table};

pub const BRAND: &str = "WOW AUDIT";
pub const HEADER_TITLE: &str = "Q3 2025 Performance Overview";

pub const PIE_COLORS: &[&str] = &["#0d48a2", "#115cd2", "#2875ee", "#ff4703", "#808080"];

// --- Overview ---

pub const EXECUTIVE_OVERVIEW: &[&str] = &[
    "WOW Coach continued steady growth through Q3 2025, expanding both user base and gross merchandise value (GMV).",
    "Marketing investments across Xiaohongshu (XHS) and Meta (IG/FB) achieved improving cost-per-lead efficiency, with XHS proving the strongest GMV driver while Meta served effectively as a low-CAC entry funnel.",
];

pub const PLATFORM_PERFORMANCE: Table = Table {
    headers: &["Month", "Ad Spend (SGD)", "GMV (SGD)", "New Users", "Leads", "CPL (SGD)", "ROAS", "Key Highlights"],
    rows: &[
        &["June", "3,862", "48,130", "572", "387", "~8.3", "10.39×", "Baseline recovery; direct-to-package CVR 19% best performer"],
        &["August", "5,150", "60,911", "910", "602", "8.55", "11.83×", "CPL −17.9% MoM; app MAU 1.5 k; conversion 10.8%"],
        &["September", "6,102", "57,975", "866", "854", "7.2 (avg)", "9.5×", "Meta CPL $4.44 (best); overall GMV −4.8% MoM"],
    ],
};
pub const PLATFORM_PERFORMANCE_TOTAL: &str = "Quarter total: ~15 K SGD ad spend → GMV 166 K SGD (≈ 11× blended ROAS)";

pub const USER_REVENUE_TRENDS: Table = Table {
    headers: &["Metric", "July", "Aug", "Sept", "Trend & Insight"],
    rows: &[
        &["MAU", "1.2 k", "1.5 k", "1.7 k", "Steady growth (+41% Q over Q)"],
        &["New Users", "773", "910", "866", "Peak Aug; minor drop Sept"],
        &["New-user Conversion", "11.1 %", "11.9 %", "14.2 %", "Conversion efficiency improving"],
        &["Transactions", "162", "201", "218", "Volume rising"],
        &["AOV", "$297", "$303", "$266", "↓ Sept (−12 %), dragging GMV"],
        &["GMV / MAU", "$40.1", "$40.6", "$34.1", "↓ Sept → weaker monetization"],
    ],
};
pub const USER_REVENUE_TAKEAWAY: &str =
    "Key takeaway: more users are joining and converting, but spending less per transaction — main issue to address.";

pub const XHS_CHANNEL: &[&str] = &[
    "Budget: Jul $3,858 → Aug $4,471 → Sept $4,680 (+21%)",
    "Exposure: 299 k → 346 k → 360 k (+20%)",
    "CTR: 5.3 % → 4.7 % → 4.2 % (↓)",
    "CPC: $0.24 → $0.27 → $0.31 (↑)",
    "Leads: 363 → 512 → 534 (+47%)",
    "CPL: $10.63 → $8.73 → $8.76 (↓18%)",
    "ROAS: ≈ 7.85 × (Sept GMV ≈ 36.7k SGD)",
];
pub const XHS_INTERPRETATION: &str =
    "Interpretation: Top of funnel fatigue but bottom funnel conversion improving. Needed: creative refresh & retargeting.";

pub const META_CHANNEL: &[&str] = &[
    "Budget: Jul $774 → Aug $679 → Sept $1,422",
    "Impressions: 49 k → 52 k → 124 k",
    "Clicks: 1,957 → 1,501 → 4,383",
    "CTR: 4.0 % → 2.9 % → 3.5 %",
    "CPC: $0.40 → $0.45 → $0.32",
    "Leads: 142 → 90 → 320",
    "CPL: $5.45 → $7.54 → $4.44 (best)",
    "ROAS: 3.68 ×",
];
pub const META_INTERPRETATION: &str =
    "Interpretation: Regained efficiency in Sept. Best as low-CAC top-funnel & remarketing tool.";

pub const FUNNEL_PERFORMANCE: Table = Table {
    headers: &["Month", "Overall Conversion (Home→Order)", "Direct Package Flow CVR", "Main Drop-off Stage", "Avg Engagement per User"],
    rows: &[
        &["June", "10.9 %", "18.9 %", "Package Details / Coach Details", "7 m 53 s"],
        &["Aug", "10.8 %", "16.6 %", "Coach Details & Package Details", "9 m 45 s (↑ 24%)"],
        &["Sept", "≈ 10–11 %", "≈ 16 % (est.)", "Same", "≈ 9 m+"],
    ],
};
pub const FUNNEL_TAKEAWAY: &str =
    "Takeaway: Direct-to-package pages consistently convert 2× better than multi-step flows → UI/UX simplification can lift sales 15–20 %.";

pub const SPORTS_DEMAND: Table = Table {
    headers: &["Rank", "Sport", "Share", "Observation"],
    rows: &[
        &["1", "Tennis", "43 %", "Core driver; main GMV source"],
        &["2", "Swimming", "17 %", "Steady interest, good for family segment"],
        &["3", "Pickleball", "10 %", "Emerging trend after Pickleball Palooza"],
        &["4", "Badminton", "10 %", "Popular among youth"],
        &["5", "Squash", "8 %", "Newly introduced category"],
    ],
};

pub const COST_EFFICIENCY: &[&str] = &[
    "Blended CAC: ≈ $50 (range $47–54)",
    "CPL: $8.0 – $9.0",
    "AOV Target: $290 +",
    "GMV/MAU Target: $40 +",
    "Repeat rate goal: ≥ 30 %",
];

pub const FRAGMENTED_FUNNEL_FLOWS: &[&str] = &[
    "Ad → App (tracked partially through Firebase ✓)",
    "Ad → WhatsApp → App/Booking (✗ not tracked)",
    "Website → App or Stripe Checkout (✗ mostly untracked)",
];
pub const FRAGMENTED_FUNNEL_EXPLANATION: &str =
    "That means your analytics only see part of the user journey — you know how many people use the app, but not how many were influenced or converted through other channels (website or chat).";
pub const FRAGMENTED_FUNNEL_RISKS: &[&str] = &[
    "You can’t measure total lead sources (some conversions will look “organic” but actually came from paid).",
    "You can’t optimize WhatsApp messages or website CTAs.",
    "You’ll underreport your ROAS and misallocate ad budget.",
];

// --- Analytics ---

pub const SHORT_TERM_INSIGHTS: &[&str] = &[
    "Creative Reset for XHS: new visuals & copy to lift CTR > 5%.",
    "Meta as Lead Magnet: continue low-ticket ($45 trial) offers to grow MAU.",
    "Focus on Tennis + Swimming content for ads & reels.",
    "App UX Tweak: collapse coach/package pages to reduce clicks.",
];

pub const MID_TERM_INSIGHTS: &[&str] = &[
    "72-hour Upgrade Mechanism: nurture low-ticket Meta leads into high-ticket XHS buyers.",
    "Reactivation Campaign for past users with bundle discounts.",
    "Referral & Loyalty Integration to increase retention > 30 %.",
];

pub const BUDGET_ALLOCATION: Table = Table {
    headers: &["Channel", "Recommended Split", "Condition to Adjust"],
    rows: &[
        &["XHS", "70–80 %", "Maintain until CTR > 5% and AOV rebound > $290"],
        &["Meta", "20–30 %", "If Lead → Paid ≥ 18 % and AOV ≥ $200 for 2 weeks → raise to 40 %"],
    ],
};

pub const CURRENT_FLOW: &str =
    "Ad → App Store → Download → In-App Booking (Stripe checkout). Sometimes: Ad → WhatsApp → Manual chat → CS sends link → App → Checkout";

pub const TRACKING_GAPS: Table = Table {
    headers: &["Stage", "Tool", "Problem"],
    rows: &[
        &["Ad (Meta/XHS)", "Managed by vendor", "Clicks tracked but no deep link attribution"],
        &["App install", "App Store / Google Play", "Not linked to ad source (no install tracking pixel)"],
        &["In-app activity", "Firebase / GA4", "Tracks events, but not source of user (no UTM)"],
        &["Checkout (Stripe)", "Payment data siloed", "Doesn’t send purchase events back to GA or ad platforms"],
        &["WhatsApp routing", "Manual", "Breaks attribution chain completely"],
    ],
};
pub const TRACKING_GAPS_RESULT: &str =
    "Result: You can see installs, users, and transactions — but not which ad, channel, or campaign drove them.";

pub const TRACKING_INTRO: &str =
    "Below is your minimum viable tracking architecture — once this is done, you’ll have a clear funnel attribution from impression → install → purchase.";

pub const TRACKING_NON_NEGOTIABLES: Table = Table {
    headers: &["Layer", "Tool", "Purpose"],
    rows: &[
        &["A. Install & App Event Attribution", "Firebase + GA4 + Apple SKAdNetwork (iOS) + Google Play Install Referrer (Android)", "Tells you which ad or campaign caused the install."],
        &["B. Conversion & Revenue Tracking", "Firebase events + Stripe integration → GA4 & ad platforms", "Send purchase events with value back to analytics and ad platforms."],
        &["C. Deep Linking", "Branch.io or Firebase Dynamic Links", "Send users directly from ad → correct in-app screen after install."],
        &["D. Server-Side Event Forwarding", "Facebook CAPI, Google Ads API, XHS API", "Ensures ad platforms receive accurate conversion data even if cookies are blocked."],
        &["E. Web + App Unified Measurement", "GA4 property with both Web stream + App stream connected", "See if users start on your website then download app or WhatsApp."],
    ],
};

pub const INSTALL_ATTRIBUTION_STEPS: &[&str] = &[
    "Integrate Firebase SDK with GA4 linked.",
    "Enable Google Ads / Meta Ads linking inside GA4 → “Attribution Settings.”",
    "Use UTM deep links (via Branch, Adjust, or AppsFlyer).",
    "Activate SKAdNetwork (for iOS) and Google Install Referrer (for Android).",
];

pub const REVENUE_TRACKING_STEPS: &[&str] = &[
    "Add custom Firebase events: view_coach_detail, begin_checkout, purchase_completed.",
    "Send purchase_completed events (with transaction value) to GA4, Meta Pixel/CAPI, and XHS pixel.",
    "Use webhooks from Stripe → Firebase Cloud Functions to push revenue events automatically.",
];

pub const UNLOCKED_METRICS: Table = Table {
    headers: &["Funnel Stage", "Metric", "How It Helps Marketing"],
    rows: &[
        &["Ad → Install", "Cost-per-install (CPI)", "Know which campaign acquires users cheapest"],
        &["Install → Sign-up", "Activation rate", "Identify best creatives or offers"],
        &["Sign-up → Checkout", "Conversion rate", "Optimize UX and messaging"],
        &["Checkout → Payment", "Revenue per source", "Enables true ROAS / LTV per channel"],
        &["Returning users", "Retention rate", "Judge loyalty & lifetime value"],
        &["Channel share", "Source breakdown (XHS, Meta, Organic)", "Decide where to invest next"],
    ],
};

pub const OPTIONAL_ADDONS: Table = Table {
    headers: &["Integration", "Use Case"],
    rows: &[
        &["Mixpanel / Amplitude", "Deeper behavioral analytics, retention cohorts"],
        &["Hotjar / Firebase Analytics Heatmap", "UX heatmaps to see drop-offs"],
        &["Google Tag Manager (GTM for Firebase)", "Central place to manage tags & pixels"],
        &["Meta SDK (App Events)", "Send in-app events back to Meta for smarter optimization"],
        &["WhatsApp API integration", "Auto-tag chats with source campaign (so attribution isn’t lost)"],
    ],
};

pub const GTM_STEPS: &[&str] = &[
    "Add Google Analytics 4 tag → sends all events to GA4.",
    "Add Meta Pixel → to track ad-driven visitors.",
    "Add XHS Pixel (小红书像素) → if they allow external conversion tracking.",
];

pub const WHATSAPP_STEPS: &[&str] = &[
    "Train your customer support team to tag each chat (e.g., “Lead – Tennis / From Meta”).",
    "Later, you can cross-check how many WhatsApp chats lead to completed bookings.",
];

pub const AI_CHAT_NOTE: &str =
    "Integrate with AI to handle chat and only direct to support if question/inquiries are complex. This ensures most inquiries and touchpoints are addressed instantly to reduce drop-off.";

// --- October ---

pub const PROPOSAL_FILES: &[Link] = &[
    Link { label: "Halloween Campaign", url: "https://drive.google.com/file/d/17SSX35KSG-cqLcOU37fJDis3wcESIppx/view?usp=drive_link" },
    Link { label: "Organic Posting", url: "https://drive.google.com/file/d/1jIsYpafjvhDaqr3SqU6y6d6xVcgmChpg/view?usp=drive_link" },
];

pub const BRAND_OPTIMISATION: Table = Table {
    headers: &["Area", "Deliverable", "Objective"],
    rows: &[
        &["Social Bios (IG, TikTok, FB)", "Rewrite profile bios with clear value statement + local SEO keywords (e.g. “Book verified sports coaches in Singapore”)", "Increase discovery & click-through"],
        &["Link in Bio / CTA Landing", "A simple landing with quick button actions (lead magnet, app download, quick form) and direct WhatsApp support for queries", "Centralised CTA funnel"],
        &["Highlight Covers + Story Categories", "Design consistent covers (Tennis, Swimming)", "Brand consistency"],
        &["Hashtag Library", "Build segmented sets (#SingaporeSports #WOWCoach #TennisSG etc.)", "Consistent reach optimisation"],
    ],
};

pub const CONTENT_ENGINE: Table = Table {
    headers: &["Format", "Frequency", "Example Themes"],
    rows: &[
        &["Short Reels / TikToks", "1 per day", "Quick coach tips, behind-the-scenes, funny training moments"],
        &["IG Stories", "Daily", "Polls (“Tennis or Swim?”), progress clips, class ambience"],
        &["Static Posts / Carousels", "2–3 × per week", "“Top 3 beginner mistakes in tennis”, “How to choose your coach”"],
        &["UGC / Coach Features", "1 × per week", "Coach spotlight with CTA “Book on WOW Coach App”"],
        &["Community Interaction", "Daily", "Reply to DMs/comments, reshare client tags, thank-you posts"],
    ],
};
pub const CONTENT_ENGINE_GOAL: &str =
    "Output goal: consistent daily posting cadence → higher engagement → steady app downloads.";

// --- Dev checklist ---

pub const DEV_GOAL: &str =
    "Give marketing full visibility across every user touchpoint — from ad impression → website → app → booking → Stripe payment → WhatsApp → notifications.";

pub const MULTI_CHANNEL_ATTRIBUTION: Table = Table {
    headers: &["Task", "Tool", "Notes"],
    rows: &[
        &["Add utm_source, utm_medium, utm_campaign to every ad & bio link", "All ad platforms", "Example: utm_source=tiktok&utm_medium=cpc&utm_campaign=tennis_trial"],
        &["Use Firebase Dynamic Links (or Branch.io) for app installs", "Firebase", "Carries utm_ data through App Store install and first open"],
        &["Integrate TikTok Pixel SDK (App + Web)", "TikTok Events API", "For install + conversion tracking"],
        &["Integrate Meta SDK / Conversions API", "Facebook SDK", "For installs, add-to-cart, purchases"],
        &["Enable XHS (小红书) Pixel / API (if available)", "XHS API", "Attribute conversions to XHS ads"],
        &["Link Firebase ↔ GA4 ↔ Google Ads", "Firebase Integrations", "Pass event data to Google Ads campaigns"],
        &["Add Install Referrer API (Android) & SKAdNetwork (iOS)", "Mobile SDK", "Required for privacy-compliant attribution"],
    ],
};
pub const MULTI_CHANNEL_RESULT: &str =
    "Expected result: GA4 and Firebase will show source/medium for every user session and purchase.";

pub const FIREBASE_EVENTS: Table = Table {
    headers: &["Event", "Trigger", "Parameters"],
    rows: &[
        &["app_install_source", "On first open", "utm_source, utm_medium, utm_campaign"],
        &["view_coach_detail", "Coach profile opened", "coach_id, sport, source"],
        &["view_package_detail", "Package opened", "package_id, price, sport, source"],
        &["begin_checkout", "Click “Book Now”", "package_id, price, source"],
        &["purchase_completed", "Stripe payment success", "amount, currency, sport, is_new_user, source"],
        &["registration_completed", "Account created", "source, referral_code"],
        &["whatsapp_click", "Tap WA button", "screen_name, source"],
        &["notification_banner_view", "In-app banner or promo notification viewed", "banner_id, placement, source"],
        &["notification_banner_click", "User clicks banner", "banner_id, destination, source"],
    ],
};
pub const FIREBASE_NOTES: &[&str] = &[
    "Use logEvent() in Firebase SDK (Android + iOS).",
    "Mark purchase_completed, banner_click, and registration_completed as Conversions in GA4.",
    "All events must include source so attribution flows end-to-end.",
];

pub const STRIPE_LINK: &[&str] = &[
    "Use Stripe webhook (checkout.session.completed) → Cloud Function logs purchase_completed.",
    "Parameters: amount, currency, user_id, sport_type, source.",
    "Optional: mirror this to Meta & TikTok Conversions APIs.",
];

pub const WEBSITE_ANALYTICS: Table = Table {
    headers: &["Step", "Action"],
    rows: &[
        &["Install Google Tag Manager", "Master container for all pixels"],
        &["Add GA4, Meta Pixel, TikTok Pixel, XHS Pixel", "All linked to same GA4 property"],
        &["Track events: page_view, cta_click, form_submit, whatsapp_click, purchase_web", "Include utm_ data"],
        &["Add Hotjar (or Microsoft Clarity)", "Heatmap & session replay of landing page"],
        &["Verify same GA4 User-ID as app to unify users", "Enables cross-device attribution"],
    ],
};

pub const WHATSAPP_FUNNEL: &[&str] = &[
    "Replace all wa.me links with UTM-tagged URLs.",
    "Example: https://wa.me/659XXXXXXX?text=Hi&utm_source=instagram&utm_campaign=tennis_trial",
    "Track click events via GTM or Firebase (whatsapp_click).",
    "Long-term: integrate WhatsApp Business API / CRM (WATI, Zoko, Twilio) to record chat source and conversion.",
];

pub const BANNER_PROBLEM: &str = "Problem: Current homepage banners sent via notification aren’t tracked.";
pub const BANNER_SOLUTION: &[&str] = &[
    "Assign unique banner_id for each push or promo banner.",
    "Log two events in Firebase: notification_banner_view and notification_banner_click.",
    "Parameters: banner_id, placement, target_page, user_id, utm_source.",
    "Optional: add banner_impression → GA4 custom dimension for CTR analysis.",
    "Link these banners to UTM-tagged URLs so follow-up behavior is attributed.",
];

pub const HEATMAP_UX: &[&str] = &[
    "Tool: Hotjar / FullStory / Firebase In-App Heatmap plugin",
    "Purpose: Understand tap hotspots, scroll depth, drop-offs",
    "A/B test banners or CTA placements based on heatmap results.",
];

pub const LOOKER_METRICS: &[&str] = &[
    "Installs by source (Meta, TikTok, XHS, Organic)",
    "Purchases by channel",
    "CTR on homepage banners",
    "Revenue (Stripe) by sport",
    "Conversion funnel: view_coach_detail → begin_checkout → purchase_completed",
    "WhatsApp click volume → app downloads",
];

pub const QA_VALIDATION: &[&str] = &[
    "Use Firebase DebugView to verify all new events fire.",
    "Test Android & iOS links from TikTok, XHS, Meta.",
    "Confirm GA4 “Source / Medium” shows expected attribution.",
    "Verify Hotjar recording and banner click heatmap appear.",
    "Match Stripe revenue totals with GA4 revenue for accuracy.",
];

pub const SETUP_OUTCOME: &[&str] = &[
    "End-to-end visibility of where every user came from (TikTok, Meta, XHS, organic, WhatsApp)",
    "Conversion tracking for installs, bookings, payments, and banners",
    "Heatmap data for UI optimization",
    "Reliable ROAS, CAC, and funnel analytics in one GA4 dashboard",
];
