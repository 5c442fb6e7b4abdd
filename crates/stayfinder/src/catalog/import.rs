use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::domain::{Catalog, HotelRecord};
use super::CatalogError;

/// Features at most this long double as lowercase search tags.
const MAX_TAG_LENGTH: usize = 15;
const MAX_SLUG_LENGTH: usize = 60;

/// Outcome of one CSV import pass, before catalog validation.
#[derive(Debug)]
pub struct CsvImportSummary {
    pub hotels: Vec<HotelRecord>,
    pub skipped_rows: usize,
}

impl CsvImportSummary {
    pub fn into_catalog(self) -> Result<Catalog, CatalogError> {
        Catalog::new(self.hotels)
    }
}

/// Converts marketing CSV exports (`Hotel_Name`, `City`, `Hotel_Rating`,
/// `Hotel_Price`, `Distance_km`, `Feature_1`..`Feature_9`, `Description`,
/// `Address`) into catalog records.
pub struct CsvCatalogImporter;

impl CsvCatalogImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<CsvImportSummary, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<CsvImportSummary, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut hotels = Vec::new();
        let mut skipped_rows = 0usize;
        let mut taken_ids: HashSet<String> = HashSet::new();

        for row in csv_reader.deserialize::<HotelCsvRow>() {
            let row = row?;

            // Rows without a hotel name carry nothing worth keeping.
            let name = match row.name.as_deref() {
                Some(name) => name.to_string(),
                None => {
                    skipped_rows += 1;
                    continue;
                }
            };

            let city = row.city.clone().unwrap_or_default();
            let rating = row.rating();
            let (amenities, tags) = row.features();
            let description = row
                .description
                .clone()
                .unwrap_or_else(|| fallback_description(&name, &city, rating));

            let base = slugify(&format!("{name}-{city}"));
            let id = unique_id(&base, &mut taken_ids);

            hotels.push(HotelRecord {
                id,
                name,
                city,
                address: row.address.clone().unwrap_or_default(),
                description,
                price_per_night: row.nightly_price(),
                rating,
                distance_from_center_km: row.distance_km(),
                ideal_for: Vec::new(),
                tags,
                amenities,
                sdg_tags: Vec::new(),
            });
        }

        Ok(CsvImportSummary {
            hotels,
            skipped_rows,
        })
    }
}

#[derive(Debug, Deserialize)]
struct HotelCsvRow {
    #[serde(rename = "Hotel_Name", default, deserialize_with = "empty_string_as_none")]
    name: Option<String>,
    #[serde(rename = "City", default, deserialize_with = "empty_string_as_none")]
    city: Option<String>,
    #[serde(rename = "Hotel_Rating", default, deserialize_with = "empty_string_as_none")]
    rating: Option<String>,
    #[serde(rename = "Hotel_Price", default, deserialize_with = "empty_string_as_none")]
    price: Option<String>,
    #[serde(rename = "Distance_km", default, deserialize_with = "empty_string_as_none")]
    distance_km: Option<String>,
    #[serde(rename = "Feature_1", default, deserialize_with = "empty_string_as_none")]
    feature_1: Option<String>,
    #[serde(rename = "Feature_2", default, deserialize_with = "empty_string_as_none")]
    feature_2: Option<String>,
    #[serde(rename = "Feature_3", default, deserialize_with = "empty_string_as_none")]
    feature_3: Option<String>,
    #[serde(rename = "Feature_4", default, deserialize_with = "empty_string_as_none")]
    feature_4: Option<String>,
    #[serde(rename = "Feature_5", default, deserialize_with = "empty_string_as_none")]
    feature_5: Option<String>,
    #[serde(rename = "Feature_6", default, deserialize_with = "empty_string_as_none")]
    feature_6: Option<String>,
    #[serde(rename = "Feature_7", default, deserialize_with = "empty_string_as_none")]
    feature_7: Option<String>,
    #[serde(rename = "Feature_8", default, deserialize_with = "empty_string_as_none")]
    feature_8: Option<String>,
    #[serde(rename = "Feature_9", default, deserialize_with = "empty_string_as_none")]
    feature_9: Option<String>,
    #[serde(rename = "Description", default, deserialize_with = "empty_string_as_none")]
    description: Option<String>,
    #[serde(rename = "Address", default, deserialize_with = "empty_string_as_none")]
    address: Option<String>,
}

impl HotelCsvRow {
    fn rating(&self) -> f64 {
        parse_number(self.rating.as_deref()).unwrap_or(0.0)
    }

    /// Fractional prices in exports are clerical noise, so keep whole rupees.
    fn nightly_price(&self) -> f64 {
        parse_number(self.price.as_deref()).unwrap_or(0.0).trunc()
    }

    fn distance_km(&self) -> f64 {
        parse_number(self.distance_km.as_deref()).unwrap_or(0.0)
    }

    fn feature_columns(&self) -> [Option<&str>; 9] {
        [
            self.feature_1.as_deref(),
            self.feature_2.as_deref(),
            self.feature_3.as_deref(),
            self.feature_4.as_deref(),
            self.feature_5.as_deref(),
            self.feature_6.as_deref(),
            self.feature_7.as_deref(),
            self.feature_8.as_deref(),
            self.feature_9.as_deref(),
        ]
    }

    /// Feature cells may hold comma-separated lists. Each new value becomes
    /// an amenity; short ones double as lowercase tags.
    fn features(&self) -> (Vec<String>, Vec<String>) {
        let mut amenities: Vec<String> = Vec::new();
        let mut tags = Vec::new();

        for column in self.feature_columns().into_iter().flatten() {
            for part in column.split(',') {
                let part = part.trim();
                if part.is_empty() || amenities.iter().any(|existing| existing == part) {
                    continue;
                }

                amenities.push(part.to_string());
                if part.chars().count() <= MAX_TAG_LENGTH {
                    tags.push(part.to_lowercase());
                }
            }
        }

        (amenities, tags)
    }
}

fn parse_number(value: Option<&str>) -> Option<f64> {
    value.and_then(|raw| raw.trim().parse::<f64>().ok())
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn fallback_description(name: &str, city: &str, rating: f64) -> String {
    let rating_text = if rating > 0.0 {
        rating.to_string()
    } else {
        "N/A".to_string()
    };
    format!("{name} in {city}. Rated {rating_text}. A great choice for travellers.")
}

/// Lowercase alphanumerics separated by single hyphens, clipped so ids stay
/// readable in URLs.
fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut previous_hyphen = false;

    for ch in value.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch);
            previous_hyphen = false;
        } else if !slug.is_empty() && !previous_hyphen {
            slug.push('-');
            previous_hyphen = true;
        }
    }

    slug.truncate(MAX_SLUG_LENGTH);
    while slug.ends_with('-') {
        slug.pop();
    }

    slug
}

fn unique_id(base: &str, taken: &mut HashSet<String>) -> String {
    let mut candidate = base.to_string();
    let mut suffix = 1;

    while taken.contains(&candidate) {
        candidate = format!("{base}-{suffix}");
        suffix += 1;
    }

    taken.insert(candidate.clone());
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn import(csv: &str) -> CsvImportSummary {
        CsvCatalogImporter::from_reader(Cursor::new(csv.to_string())).expect("import succeeds")
    }

    #[test]
    fn imports_rows_and_builds_slug_ids() {
        let csv = "Hotel_Name,City,Hotel_Rating,Hotel_Price,Distance_km,Feature_1,Feature_2,Description,Address\n\
Taj Palace,Mumbai,4.5,5400.75,2.3,Wifi,Pool,Iconic seafront stay,Apollo Bunder\n";
        let summary = import(csv);

        assert_eq!(summary.skipped_rows, 0);
        let hotel = &summary.hotels[0];
        assert_eq!(hotel.id, "taj-palace-mumbai");
        assert_eq!(hotel.city, "Mumbai");
        assert_eq!(hotel.price_per_night, 5400.0);
        assert_eq!(hotel.rating, 4.5);
        assert_eq!(hotel.distance_from_center_km, 2.3);
        assert_eq!(hotel.description, "Iconic seafront stay");
        assert_eq!(hotel.address, "Apollo Bunder");
        assert!(hotel.ideal_for.is_empty());
        assert!(hotel.sdg_tags.is_empty());
    }

    #[test]
    fn skips_rows_without_a_name() {
        let csv = "Hotel_Name,City,Hotel_Rating\n\
,Mumbai,4.1\n\
Kept Hotel,Pune,3.9\n";
        let summary = import(csv);

        assert_eq!(summary.skipped_rows, 1);
        assert_eq!(summary.hotels.len(), 1);
        assert_eq!(summary.hotels[0].name, "Kept Hotel");
    }

    #[test]
    fn duplicate_names_receive_numbered_suffixes() {
        let csv = "Hotel_Name,City\n\
Seaside Stay,Goa\n\
Seaside Stay,Goa\n\
Seaside Stay,Goa\n";
        let summary = import(csv);

        let ids: Vec<&str> = summary.hotels.iter().map(|hotel| hotel.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["seaside-stay-goa", "seaside-stay-goa-1", "seaside-stay-goa-2"]
        );

        let catalog = summary.into_catalog().expect("unique ids validate");
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn features_fan_out_into_amenities_and_short_tags() {
        let csv = "Hotel_Name,City,Feature_1,Feature_2\n\
Grand Lake,Udaipur,\"Pool, Spa, Pool\",Infinity Pool Deck\n";
        let summary = import(csv);
        let hotel = &summary.hotels[0];

        assert_eq!(hotel.amenities, vec!["Pool", "Spa", "Infinity Pool Deck"]);
        // "Infinity Pool Deck" is past the tag length cutoff.
        assert_eq!(hotel.tags, vec!["pool", "spa"]);
    }

    #[test]
    fn missing_numbers_default_to_zero_and_description_falls_back() {
        let csv = "Hotel_Name,City,Hotel_Rating,Hotel_Price,Distance_km\n\
Quiet Court,Indore,not-a-number,,\n";
        let summary = import(csv);
        let hotel = &summary.hotels[0];

        assert_eq!(hotel.rating, 0.0);
        assert_eq!(hotel.price_per_night, 0.0);
        assert_eq!(hotel.distance_from_center_km, 0.0);
        assert_eq!(
            hotel.description,
            "Quiet Court in Indore. Rated N/A. A great choice for travellers."
        );
    }

    #[test]
    fn slugify_collapses_punctuation_and_clips_length() {
        assert_eq!(slugify("The Fern -- An Ecotel!"), "the-fern-an-ecotel");

        let long_name = "A".repeat(80);
        assert_eq!(slugify(&long_name).len(), MAX_SLUG_LENGTH);
    }

    #[test]
    fn from_path_propagates_io_errors() {
        let error =
            CsvCatalogImporter::from_path("./does-not-exist.csv").expect_err("expected io error");

        match error {
            CatalogError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
