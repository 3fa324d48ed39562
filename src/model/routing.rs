//! Routing and address sub-structures attached to transaction details.

use serde::{de, Deserialize, Deserializer, Serialize};

/// A domestic (US) mailing address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub address1: String,
    /// Apartment, suite, unit, floor and similar.
    #[serde(default)]
    pub address2: Option<String>,
    pub city: String,
    /// 2-letter US state code.
    #[serde(default)]
    pub state: Option<String>,
    pub postal_code: String,
}

/// An address outside the US; uses a free-form region plus an ISO 3166-1
/// alpha-2 country code instead of a state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternationalAddress {
    pub address1: String,
    #[serde(default)]
    pub address2: Option<String>,
    pub city: String,
    pub region: String,
    pub postal_code: String,
    /// ISO 3166-1 alpha-2 country code.
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomesticWireRoutingInfo {
    #[serde(default)]
    pub bank_name: Option<String>,
    pub account_number: String,
    pub routing_number: String,
    #[serde(default)]
    pub address: Option<Address>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectronicRoutingInfo {
    pub account_number: String,
    pub routing_number: String,
    #[serde(default)]
    pub bank_name: Option<String>,
}

/// The intermediary bank an international wire passes through, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrespondentInfo {
    #[serde(default)]
    pub routing_number: Option<String>,
    #[serde(default)]
    pub swift_code: Option<String>,
    #[serde(default)]
    pub bank_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankDetails {
    pub bank_name: String,
    pub city_state: String,
    /// ISO 3166-1 alpha-2 country code.
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternationalWireRoutingInfo {
    /// The International Bank Account Number.
    pub iban: String,
    /// The SWIFT/BIC code of the destination bank.
    pub swift_code: String,
    #[serde(default)]
    pub correspondent_info: Option<CorrespondentInfo>,
    #[serde(default)]
    pub bank_details: Option<BankDetails>,
    #[serde(default)]
    pub address: Option<InternationalAddress>,
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Extra routing data required by the destination country, if any.
    #[serde(default, deserialize_with = "deserialize_country_specific")]
    pub country_specific: Option<CountrySpecificData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanadaBankData {
    pub bank_code: String,
    pub transit_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AustraliaBankData {
    /// Bank State Branch code identifying the destination branch.
    pub bsb_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndiaBankData {
    pub ifsc_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RussiaBankData {
    /// Taxpayer identification number of the recipient entity.
    pub inn: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhilippinesBankData {
    pub routing_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SouthAfricaBankData {
    pub branch_code: String,
}

/// Country-specific routing data for an international wire.
///
/// The wire format is an object with one mutually-exclusive key per
/// supported country; exactly one is populated, selected by the
/// destination. Deserializing an object with two or more populated keys
/// fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CountrySpecificWire", into = "CountrySpecificWire")]
pub enum CountrySpecificData {
    Canada(CanadaBankData),
    Australia(AustraliaBankData),
    India(IndiaBankData),
    Russia(RussiaBankData),
    Philippines(PhilippinesBankData),
    SouthAfrica(SouthAfricaBankData),
}

/// The flattened shape the API sends and expects.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CountrySpecificWire {
    #[serde(default)]
    country_specific_data_canada: Option<CanadaBankData>,
    #[serde(default)]
    country_specific_data_australia: Option<AustraliaBankData>,
    #[serde(default)]
    country_specific_data_india: Option<IndiaBankData>,
    #[serde(default)]
    country_specific_data_russia: Option<RussiaBankData>,
    #[serde(default)]
    country_specific_data_philippines: Option<PhilippinesBankData>,
    #[serde(default)]
    country_specific_data_south_africa: Option<SouthAfricaBankData>,
}

impl CountrySpecificWire {
    /// Collapses the wire shape into the populated variant, or `None` when
    /// every key is null. More than one populated key is an error.
    pub(crate) fn into_variant(self) -> Result<Option<CountrySpecificData>, String> {
        let mut variants = [
            self.country_specific_data_canada
                .map(CountrySpecificData::Canada),
            self.country_specific_data_australia
                .map(CountrySpecificData::Australia),
            self.country_specific_data_india
                .map(CountrySpecificData::India),
            self.country_specific_data_russia
                .map(CountrySpecificData::Russia),
            self.country_specific_data_philippines
                .map(CountrySpecificData::Philippines),
            self.country_specific_data_south_africa
                .map(CountrySpecificData::SouthAfrica),
        ]
        .into_iter()
        .flatten();

        match (variants.next(), variants.next()) {
            (first, None) => Ok(first),
            (_, Some(_)) => {
                Err("country-specific data populates more than one country".to_string())
            }
        }
    }
}

impl TryFrom<CountrySpecificWire> for CountrySpecificData {
    type Error = String;

    fn try_from(wire: CountrySpecificWire) -> Result<Self, Self::Error> {
        wire.into_variant()?
            .ok_or_else(|| "country-specific data populates no country".to_string())
    }
}

impl From<CountrySpecificData> for CountrySpecificWire {
    fn from(data: CountrySpecificData) -> Self {
        let mut wire = Self::default();
        match data {
            CountrySpecificData::Canada(x) => wire.country_specific_data_canada = Some(x),
            CountrySpecificData::Australia(x) => wire.country_specific_data_australia = Some(x),
            CountrySpecificData::India(x) => wire.country_specific_data_india = Some(x),
            CountrySpecificData::Russia(x) => wire.country_specific_data_russia = Some(x),
            CountrySpecificData::Philippines(x) => wire.country_specific_data_philippines = Some(x),
            CountrySpecificData::SouthAfrica(x) => {
                wire.country_specific_data_south_africa = Some(x)
            }
        }
        wire
    }
}

/// Field-level deserializer that treats an all-null country-specific object
/// the same as an absent one.
fn deserialize_country_specific<'de, D>(
    deserializer: D,
) -> Result<Option<CountrySpecificData>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<CountrySpecificWire>::deserialize(deserializer)? {
        None => Ok(None),
        Some(wire) => wire.into_variant().map_err(de::Error::custom),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebitCardInfo {
    /// The card the transaction was made with.
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditCardInfo {
    pub id: String,
}
