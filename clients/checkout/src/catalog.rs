//! Static catalog of clinic services and rupee formatting

/// A bookable clinic service with a fixed price in rupees
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub price: f64,
}

pub const DENTAL_SERVICES: &[Service] = &[
    Service {
        id: "consultation",
        name: "Dental Consultation",
        description: "Comprehensive oral examination with treatment planning.",
        price: 500.0,
    },
    Service {
        id: "cleaning",
        name: "Teeth Cleaning & Polishing",
        description: "Professional scaling and polishing to remove plaque and tartar.",
        price: 1500.0,
    },
    Service {
        id: "filling",
        name: "Composite Filling",
        description: "Tooth-coloured restoration for cavities and minor fractures.",
        price: 2000.0,
    },
    Service {
        id: "extraction",
        name: "Tooth Extraction",
        description: "Simple extraction under local anaesthesia.",
        price: 1200.0,
    },
    Service {
        id: "whitening",
        name: "Teeth Whitening",
        description: "In-clinic whitening for a brighter smile in one visit.",
        price: 6000.0,
    },
    Service {
        id: "root-canal",
        name: "Root Canal Treatment",
        description: "Single-sitting root canal therapy to save an infected tooth.",
        price: 8000.0,
    },
];

/// Look up a catalog service by id
pub fn find_service(id: &str) -> Option<&'static Service> {
    DENTAL_SERVICES.iter().find(|s| s.id == id)
}

/// Render an amount as rupees with Indian digit grouping (`₹1,23,456.5`)
///
/// Fractions are rounded to paise and trailing zeros dropped.
pub fn format_inr(amount: f64) -> String {
    let paise = if amount.is_finite() && amount > 0.0 {
        (amount * 100.0).round() as u64
    } else {
        0
    };
    let rupees = paise / 100;
    let fraction = paise % 100;

    let grouped = group_indian(&rupees.to_string());
    if fraction == 0 {
        format!("₹{}", grouped)
    } else {
        let fraction = format!("{:02}", fraction);
        format!("₹{}.{}", grouped, fraction.trim_end_matches('0'))
    }
}

/// Last three digits, then pairs: 1234567 -> 12,34,567
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
