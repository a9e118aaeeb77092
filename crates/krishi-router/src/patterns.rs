//! Classification patterns per advisory domain.
//!
//! Each specialized domain owns a fixed table: English keywords, English
//! phrases, romanized Hindi, Devanagari. Latin-script patterns are
//! case-insensitive and word-bounded. Devanagari patterns are plain
//! alternations since word boundaries are unreliable around combining marks.
//!
//! A domain's score is divided by its table length, so tables may differ in
//! size without skewing the ranking.

use krishi_shared::Domain;

const CROP_SELECTION: [&str; 4] = [
    r"(?i)\b(crops?|variety|varieties|sow|sowing|grow|cultivate|cultivation|plant)\b",
    r"(?i)\b(which crop|what to grow|what to sow|what to plant|recommend|suggest|rabi|kharif|zaid|season)\b",
    r"(?i)\b(fasal|ugana|ugani|ugaun|bona|buvai|kheti|kaun si)\b",
    r"कौन सी फसल|क्या उगाएं|फसल की सिफारिश|बुवाई|खेती",
];

const PEST_MANAGEMENT: [&str; 4] = [
    r"(?i)\b(pests?|insects?|bugs?|diseases?|fungus|fungal|blight|aphids?|worms?|caterpillars?|yellow spots?)\b",
    r"(?i)\b(spray|spraying|pesticides?|insecticides?|fungicides?|treatment|medicine)\b",
    r"(?i)\b(keet|keeda|keede|kide|bimari|rog|dawai|upchar|ilaj)\b",
    r"कीट|कीड़े|बीमारी|रोग|स्प्रे|दवाई",
];

const IRRIGATION: [&str; 4] = [
    r"(?i)\b(water|watering|irrigate|irrigation|irrigating|drip|sprinkler|canal|borewell|tube ?well)\b",
    r"(?i)\b(when to water|how much water|moisture|schedule|dry spell)\b",
    r"(?i)\b(pani|sinchai|sinchana|sichai)\b",
    r"पानी|सिंचाई|कब पानी|कितना पानी",
];

const FINANCE_POLICY: [&str; 4] = [
    r"(?i)\b(loans?|credit|subsidy|subsidies|insurance|schemes?|yojana|kcc|pm[- ]kisan)\b",
    r"(?i)\b(bank|finance|money|cost|interest|emi|premium)\b",
    r"(?i)\b(karz|karza|karja|rin|bima|paisa|paise|kharcha|sarkari)\b",
    r"ऋण|कर्ज़|कर्ज|सब्सिडी|बीमा|योजना|पैसा",
];

const MARKET_TIMING: [&str; 4] = [
    r"(?i)\b(sell|selling|markets?|prices?|mandi|rates?|msp|buyers?)\b",
    r"(?i)\b(when to sell|market price|best time to sell|demand)\b",
    r"(?i)\b(bechna|bechana|bechu|bechein|bhav|daam|keemat)\b",
    r"बेचना|मंडी|भाव|रेट|कब बेचें|दाम",
];

const HARVEST_PLANNING: [&str; 4] = [
    r"(?i)\b(harvest|harvesting|reap|reaping|threshing|mature|maturity|ripe|ripening)\b",
    r"(?i)\b(when to harvest|cutting time|ready for harvest|post[- ]harvest|storage)\b",
    r"(?i)\b(katai|kataai|katana|pakna|pakana|taiyar)\b",
    r"कटाई|काटना|पकना|तैयार|कब काटें",
];

const INPUT_MATERIALS: [&str; 4] = [
    r"(?i)\b(fertili[sz]ers?|manure|compost|urea|dap|npk|potash|micronutrients?)\b",
    r"(?i)\b(organic|vermicompost|bio[- ]?fertili[sz]ers?|seed treatment|seeds?|dose|dosage)\b",
    r"(?i)\b(khad|urvarak|gobar|beej)\b",
    r"खाद|उर्वरक|बीज|गोबर|कंपोस्ट",
];

/// Pattern table for a domain. `General` has none; it is the fallback.
pub fn pattern_table(domain: Domain) -> &'static [&'static str] {
    match domain {
        Domain::CropSelection => &CROP_SELECTION,
        Domain::PestManagement => &PEST_MANAGEMENT,
        Domain::Irrigation => &IRRIGATION,
        Domain::FinancePolicy => &FINANCE_POLICY,
        Domain::MarketTiming => &MARKET_TIMING,
        Domain::HarvestPlanning => &HARVEST_PLANNING,
        Domain::InputMaterials => &INPUT_MATERIALS,
        Domain::General => &[],
    }
}
