//! Translation codes as BibleGateway prints them, with their published names.

/// Sorted by code so lookups can binary search.
pub static VERSIONS: &[(&str, &str)] = &[
    ("AKJV", "Authorized (King James) Version"),
    ("AMP", "Amplified Bible"),
    ("AMPC", "Amplified Bible, Classic Edition"),
    ("ASV", "American Standard Version"),
    ("BRG", "BRG Bible"),
    ("CEB", "Common English Bible"),
    ("CEV", "Contemporary English Version"),
    ("CJB", "Complete Jewish Bible"),
    ("CSB", "Christian Standard Bible"),
    ("DARBY", "Darby Translation"),
    ("DLNT", "Disciples’ Literal New Testament"),
    ("DRA", "Douay-Rheims 1899 American Edition"),
    ("EASY", "EasyEnglish Bible"),
    ("EHV", "Evangelical Heritage Version"),
    ("ERV", "Easy-to-Read Version"),
    ("ESV", "English Standard Version"),
    ("ESVUK", "English Standard Version Anglicised"),
    ("EXB", "Expanded Bible"),
    ("GNT", "Good News Translation"),
    ("GNV", "1599 Geneva Bible"),
    ("GW", "GOD’S WORD Translation"),
    ("HCSB", "Holman Christian Standard Bible"),
    ("ICB", "International Children’s Bible"),
    ("ISV", "International Standard Version"),
    ("JUB", "Jubilee Bible 2000"),
    ("KJ21", "21st Century King James Version"),
    ("KJV", "King James Version"),
    ("LEB", "Lexham English Bible"),
    ("LSB", "Legacy Standard Bible"),
    ("MEV", "Modern English Version"),
    ("MOUNCE", "Mounce Reverse Interlinear New Testament"),
    ("MSG", "The Message"),
    ("NABRE", "New American Bible (Revised Edition)"),
    ("NASB", "New American Standard Bible"),
    ("NASB1995", "New American Standard Bible 1995"),
    ("NCB", "New Catholic Bible"),
    ("NCV", "New Century Version"),
    ("NET", "New English Translation"),
    ("NIRV", "New International Reader's Version"),
    ("NIV", "New International Version"),
    ("NIVUK", "New International Version - UK"),
    ("NKJV", "New King James Version"),
    ("NLT", "New Living Translation"),
    ("NLV", "New Life Version"),
    ("NMB", "New Matthew Bible"),
    ("NOG", "Names of God Bible"),
    ("NRSVA", "New Revised Standard Version, Anglicised"),
    ("NRSVACE", "New Revised Standard Version, Anglicised Catholic Edition"),
    ("NRSVCE", "New Revised Standard Version Catholic Edition"),
    ("NRSVUE", "New Revised Standard Version Updated Edition"),
    ("NTFE", "New Testament for Everyone"),
    ("OJB", "Orthodox Jewish Bible"),
    ("PHILLIPS", "J.B. Phillips New Testament"),
    ("RGT", "Revised Geneva Translation"),
    ("RSV", "Revised Standard Version"),
    ("RSVCE", "Revised Standard Version Catholic Edition"),
    ("TLB", "Living Bible"),
    ("TLV", "Tree of Life Version"),
    ("VOICE", "The Voice"),
    ("WE", "Worldwide English (New Testament)"),
    ("WEB", "World English Bible"),
    ("WYC", "Wycliffe Bible"),
    ("YLT", "Young's Literal Translation"),
];

/// Published name for a translation code, case-insensitive.
pub fn full_name(code: &str) -> Option<&'static str> {
    let key = code.trim().to_ascii_uppercase();
    VERSIONS
        .binary_search_by(|(c, _)| (*c).cmp(key.as_str()))
        .ok()
        .map(|i| VERSIONS[i].1)
}

/// Like [`full_name`] but never fails: unknown codes name themselves.
pub fn display_name(code: &str) -> String {
    full_name(code).map(str::to_string).unwrap_or_else(|| code.to_string())
}
