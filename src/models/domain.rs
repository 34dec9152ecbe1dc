use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hospital record from the bundled directory dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hospital {
    pub id: String,
    pub name: String,
    pub city: City,
    pub district: String,
    pub address: String,
    pub phone: String,
    #[serde(default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(rename = "logoUrl", default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(rename = "appointmentUrl", default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub appointment_url: Option<String>,
}

/// The dataset writes missing links as `""`
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Administrative region a hospital belongs to
///
/// Serializes as its `台` name; deserializing goes through [`FromStr`] so the
/// `臺` spelling is accepted too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum City {
    #[serde(rename = "台北市")]
    Taipei,
    #[serde(rename = "新北市")]
    NewTaipei,
    #[serde(rename = "桃園市")]
    Taoyuan,
    #[serde(rename = "台中市")]
    Taichung,
    #[serde(rename = "台南市")]
    Tainan,
    #[serde(rename = "高雄市")]
    Kaohsiung,
    #[serde(rename = "基隆市")]
    Keelung,
    #[serde(rename = "新竹市")]
    HsinchuCity,
    #[serde(rename = "新竹縣")]
    HsinchuCounty,
    #[serde(rename = "嘉義市")]
    ChiayiCity,
    #[serde(rename = "嘉義縣")]
    ChiayiCounty,
    #[serde(rename = "苗栗縣")]
    Miaoli,
    #[serde(rename = "彰化縣")]
    Changhua,
    #[serde(rename = "南投縣")]
    Nantou,
    #[serde(rename = "雲林縣")]
    Yunlin,
    #[serde(rename = "屏東縣")]
    Pingtung,
    #[serde(rename = "宜蘭縣")]
    Yilan,
    #[serde(rename = "花蓮縣")]
    Hualien,
    #[serde(rename = "台東縣")]
    Taitung,
    #[serde(rename = "澎湖縣")]
    Penghu,
    #[serde(rename = "金門縣")]
    Kinmen,
    #[serde(rename = "連江縣")]
    Lienchiang,
}

impl City {
    /// Every city, in the order the search control lists them
    pub const ALL: [City; 22] = [
        City::Taipei,
        City::NewTaipei,
        City::Taoyuan,
        City::Taichung,
        City::Tainan,
        City::Kaohsiung,
        City::Keelung,
        City::HsinchuCity,
        City::HsinchuCounty,
        City::ChiayiCity,
        City::ChiayiCounty,
        City::Miaoli,
        City::Changhua,
        City::Nantou,
        City::Yunlin,
        City::Pingtung,
        City::Yilan,
        City::Hualien,
        City::Taitung,
        City::Penghu,
        City::Kinmen,
        City::Lienchiang,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            City::Taipei => "台北市",
            City::NewTaipei => "新北市",
            City::Taoyuan => "桃園市",
            City::Taichung => "台中市",
            City::Tainan => "台南市",
            City::Kaohsiung => "高雄市",
            City::Keelung => "基隆市",
            City::HsinchuCity => "新竹市",
            City::HsinchuCounty => "新竹縣",
            City::ChiayiCity => "嘉義市",
            City::ChiayiCounty => "嘉義縣",
            City::Miaoli => "苗栗縣",
            City::Changhua => "彰化縣",
            City::Nantou => "南投縣",
            City::Yunlin => "雲林縣",
            City::Pingtung => "屏東縣",
            City::Yilan => "宜蘭縣",
            City::Hualien => "花蓮縣",
            City::Taitung => "台東縣",
            City::Penghu => "澎湖縣",
            City::Kinmen => "金門縣",
            City::Lienchiang => "連江縣",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a name is not one of the known cities
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown city: {0}")]
pub struct UnknownCity(pub String);

impl FromStr for City {
    type Err = UnknownCity;

    /// Accepts the official `臺` spelling as well (臺北市 → 台北市)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('臺', "台");
        City::ALL
            .iter()
            .copied()
            .find(|city| city.name() == normalized)
            .ok_or_else(|| UnknownCity(s.to_string()))
    }
}

impl TryFrom<String> for City {
    type Error = UnknownCity;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_dataset_record() {
        let json = r#"{
            "id": "0101090517",
            "name": "臺北市立聯合醫院",
            "city": "台北市",
            "district": "中正區",
            "address": "臺北市中正區中華路二段33號",
            "phone": "02-2388-9595",
            "website": "",
            "services": ["急診", "門診"]
        }"#;

        let hospital: Hospital = serde_json::from_str(json).unwrap();

        assert_eq!(hospital.city, City::Taipei);
        assert_eq!(hospital.website, None);
        assert_eq!(hospital.logo_url, None);
        assert_eq!(hospital.appointment_url, None);
        assert_eq!(hospital.services, vec!["急診", "門診"]);
    }

    #[test]
    fn test_serialize_uses_camel_case_and_skips_missing_links() {
        let hospital = Hospital {
            id: "1".to_string(),
            name: "高雄市立民生醫院".to_string(),
            city: City::Kaohsiung,
            district: "苓雅區".to_string(),
            address: "高雄市苓雅區凱旋二路134號".to_string(),
            phone: "07-751-1131".to_string(),
            website: None,
            logo_url: None,
            services: vec![],
            appointment_url: Some("https://example.org/booking".to_string()),
        };

        let value = serde_json::to_value(&hospital).unwrap();

        assert_eq!(value["city"], "高雄市");
        assert_eq!(value["appointmentUrl"], "https://example.org/booking");
        assert!(value.get("website").is_none());
        assert!(value.get("logoUrl").is_none());
    }

    #[test]
    fn test_unknown_city_rejected_by_dataset() {
        let json = r#"{"id":"x","name":"n","city":"東京都","district":"","address":"","phone":""}"#;
        assert!(serde_json::from_str::<Hospital>(json).is_err());
    }

    #[test]
    fn test_dataset_record_with_traditional_city_spelling() {
        let json = r#"{"id":"1","name":"臺北市立聯合醫院","city":"臺北市","district":"中正區","address":"中華路二段33號","phone":"02-2388-9595"}"#;

        let hospital: Hospital = serde_json::from_str(json).unwrap();
        assert_eq!(hospital.city, City::Taipei);

        let out = serde_json::to_value(&hospital).unwrap();
        assert_eq!(out["city"], "台北市");
    }

    #[test]
    fn test_city_parse_accepts_traditional_spelling() {
        assert_eq!("臺北市".parse::<City>(), Ok(City::Taipei));
        assert_eq!("台東縣".parse::<City>(), Ok(City::Taitung));
        assert!("火星市".parse::<City>().is_err());
    }

    #[test]
    fn test_city_serializes_as_its_name() {
        for city in City::ALL {
            let json = serde_json::to_string(&city).unwrap();
            assert_eq!(json, format!("\"{}\"", city.name()));
        }
    }
}
