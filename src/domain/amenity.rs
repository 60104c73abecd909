#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AmenityKind {
    Wifi,
    Coffee,
    Restaurant,
    AirConditioning,
    Parking,
    MeetingRooms,
    Printer,
    Security,
    NearSubway,
}

impl AmenityKind {
    /// Case-insensitive match against the known labels. Anything else has no icon.
    pub fn classify(label: &str) -> Option<Self> {
        let kind = match label.trim().to_lowercase().as_str() {
            "wifi" => AmenityKind::Wifi,
            "coffee" => AmenityKind::Coffee,
            "restaurant" => AmenityKind::Restaurant,
            "air conditioning" => AmenityKind::AirConditioning,
            "parking" => AmenityKind::Parking,
            "meeting rooms" => AmenityKind::MeetingRooms,
            "printer" => AmenityKind::Printer,
            "security" => AmenityKind::Security,
            "near subway" => AmenityKind::NearSubway,
            _ => return None,
        };
        Some(kind)
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AmenityKind::Wifi => "📶",
            AmenityKind::Coffee => "☕",
            AmenityKind::Restaurant => "🍽️",
            AmenityKind::AirConditioning => "❄️",
            AmenityKind::Parking => "🅿️",
            AmenityKind::MeetingRooms => "🚪",
            AmenityKind::Printer => "🖨️",
            AmenityKind::Security => "🛡️",
            AmenityKind::NearSubway => "🚶",
        }
    }
}

pub fn amenity_icon(label: &str) -> Option<&'static str> {
    AmenityKind::classify(label).map(|kind| kind.icon())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_ignoring_case_and_padding() {
        assert_eq!(AmenityKind::classify("WiFi"), Some(AmenityKind::Wifi));
        assert_eq!(
            AmenityKind::classify(" Air Conditioning "),
            Some(AmenityKind::AirConditioning)
        );
        assert_eq!(
            AmenityKind::classify("near subway"),
            Some(AmenityKind::NearSubway)
        );
    }

    #[test]
    fn unknown_label_has_no_icon() {
        assert_eq!(amenity_icon("Nap pods"), None);
        assert_eq!(amenity_icon(""), None);
        assert_eq!(amenity_icon("coffee"), Some("☕"));
    }
}
