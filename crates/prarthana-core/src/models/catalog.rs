//! The built-in prayer catalog.
//!
//! The collection is fixed: the app only toggles which cards are visible,
//! it never creates or removes entries.

use super::prayer::{Category, Prayer};

/// The full catalog of prayer cards, in display order.
#[must_use]
pub fn catalog() -> Vec<Prayer> {
    vec![
        Prayer::new(
            "hanuman-chalisa",
            "हनुमान चालीसा",
            "श्री हनुमान जी की स्तुति में चालीस चौपाइयाँ। संकट हरने वाला पाठ।",
            Category::Chalisa,
        ),
        Prayer::new(
            "ganesh-aarti",
            "जय गणेश देवा",
            "श्री गणेश जी की आरती। हर शुभ कार्य के आरंभ में गाई जाती है।",
            Category::Aarti,
        ),
        Prayer::new(
            "om-jai-jagdish",
            "ॐ जय जगदीश हरे",
            "भगवान विष्णु की प्रसिद्ध आरती। संध्या पूजन का अभिन्न अंग।",
            Category::Aarti,
        ),
        Prayer::new(
            "gayatri-mantra",
            "गायत्री मंत्र",
            "ॐ भूर्भुवः स्वः। वेदों का सार माना जाने वाला महामंत्र।",
            Category::Mantra,
        ),
        Prayer::new(
            "mahamrityunjaya-mantra",
            "महामृत्युंजय मंत्र",
            "भगवान शिव का मंत्र। आरोग्य और दीर्घायु के लिए जप किया जाता है।",
            Category::Mantra,
        ),
        Prayer::new(
            "ram-bhajan",
            "श्री राम भजन",
            "रघुपति राघव राजा राम। श्री राम की भक्ति के मधुर भजन।",
            Category::Bhajan,
        ),
        Prayer::new(
            "krishna-bhajan",
            "श्री कृष्ण भजन",
            "अच्युतम् केशवम्। श्री कृष्ण की लीलाओं का गुणगान।",
            Category::Bhajan,
        ),
        Prayer::new(
            "shiv-bhakti",
            "शिव भक्ति",
            "शिव तांडव स्तोत्र और शिव भक्ति के पाठ।",
            Category::Bhakti,
        ),
        Prayer::new(
            "durga-chalisa",
            "दुर्गा चालीसा",
            "माँ दुर्गा की स्तुति। नवरात्रि में विशेष रूप से पढ़ी जाती है।",
            Category::Chalisa,
        ),
        Prayer::new(
            "devi-bhakti",
            "देवी भक्ति",
            "माँ शेरांवाली की भक्ति के जयकारे और पाठ।",
            Category::Bhakti,
        ),
    ]
}
