// Parse service - Use case for decoding raw index exports
use crate::domain::dataset::IndexDataSet;
use crate::domain::platform::PlatformSeries;
use crate::domain::sample::IndexSample;
use crate::error::ParseError;
use crate::infrastructure::config::PlatformMapping;
use crate::infrastructure::payload::{self, RawExport};

#[derive(Debug, Clone)]
pub struct ParseService {
    mappings: Vec<PlatformMapping>,
}

impl ParseService {
    pub fn new(mappings: Vec<PlatformMapping>) -> Self {
        Self { mappings }
    }

    /// Decodes a raw export document into a normalized data set with one
    /// series per configured platform, in configuration order.
    ///
    /// A platform whose block decodes but holds no samples is kept with
    /// zeroed statistics; only a missing marker or a structurally broken
    /// payload fails the whole parse.
    pub fn parse(&self, raw_text: &str) -> Result<IndexDataSet, ParseError> {
        let export = payload::extract_payload(raw_text)?;

        let mut platforms = Vec::with_capacity(self.mappings.len());
        for mapping in &self.mappings {
            let samples = extract_samples(&export, mapping)?;
            if samples.is_empty() {
                tracing::warn!("Platform {} has no samples in this export", mapping.name);
            }
            platforms.push(PlatformSeries::from_samples(
                mapping.name.clone(),
                mapping.color.clone(),
                samples,
            ));
        }

        let data_set = IndexDataSet::new(platforms);
        tracing::debug!(
            "Parsed {} samples across {} platforms",
            data_set.total_samples(),
            data_set.platforms.len()
        );
        Ok(data_set)
    }
}

fn extract_samples(
    export: &RawExport,
    mapping: &PlatformMapping,
) -> Result<Vec<IndexSample>, ParseError> {
    let block = payload::platform_block(export, mapping.position)?;
    let group = block.indexes.first().ok_or_else(|| {
        ParseError::malformed(format!(
            "platform block at position {} has no index group",
            mapping.position
        ))
    })?;

    let mut samples = Vec::with_capacity(group.time_indexes.len());
    for (index, record) in group.time_indexes.iter().enumerate() {
        let date = payload::parse_date_code(record.time).ok_or_else(|| {
            ParseError::malformed(format!(
                "invalid date code in record {} at position {}",
                index, mapping.position
            ))
        })?;
        samples.push(IndexSample::new(date, record.score));
    }
    Ok(samples)
}

/// Cheap pre-check used before accepting an uploaded document: does it carry
/// a decodable payload at all? Parsing proper still reports precise errors.
pub fn validate_format(raw_text: &str) -> bool {
    payload::extract_payload(raw_text).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn delivery_mapping() -> Vec<PlatformMapping> {
        vec![PlatformMapping {
            position: 2,
            name: "美团外卖".to_string(),
            color: "#FF6600".to_string(),
        }]
    }

    fn export_with_third_position() -> String {
        concat!(
            "saved from the index tool on 2024-01-03\n",
            "{\"code\":0,\"content\":{\"resp_list\":[",
            "{},",
            "{},",
            "{\"indexes\":[{\"time_indexes\":[",
            "{\"time\":20240102,\"score\":700},",
            "{\"time\":20240101,\"score\":500}",
            "]}]}",
            "]}}"
        )
        .to_string()
    }

    #[test]
    fn test_parse_extracts_configured_position() {
        let service = ParseService::new(delivery_mapping());
        let data_set = service.parse(&export_with_third_position()).unwrap();

        assert_eq!(data_set.platforms.len(), 1);
        let platform = &data_set.platforms[0];
        assert_eq!(platform.name, "美团外卖");
        assert_eq!(platform.color, "#FF6600");
        assert_eq!(platform.samples.len(), 2);

        // Samples come back sorted even though the export is not
        assert_eq!(
            platform.samples[0].date,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert_eq!(platform.samples[0].score, 500.0);
        assert_eq!(platform.samples[1].score, 700.0);

        assert_eq!(platform.avg_score, 600.0);
        assert_eq!(platform.max_score, 700.0);
        assert_eq!(platform.min_score, 500.0);

        let range = data_set.date_range.unwrap();
        assert_eq!(range.start, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(range.end, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    }

    #[test]
    fn test_parse_without_marker() {
        let service = ParseService::new(delivery_mapping());
        let err = service.parse("just some notes, no payload here").unwrap_err();
        assert!(matches!(err, ParseError::MissingPayloadMarker));
    }

    #[test]
    fn test_parse_with_broken_json() {
        let service = ParseService::new(delivery_mapping());
        let err = service
            .parse("{\"code\":0,\"content\":{\"resp_list\":[{\"indexes\":")
            .unwrap_err();
        assert!(matches!(err, ParseError::MalformedPayload { .. }));
    }

    #[test]
    fn test_parse_with_position_out_of_range() {
        let service = ParseService::new(delivery_mapping());
        let err = service
            .parse("{\"code\":0,\"content\":{\"resp_list\":[{}]}}")
            .unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_parse_with_missing_index_group() {
        let service = ParseService::new(delivery_mapping());
        let err = service
            .parse("{\"code\":0,\"content\":{\"resp_list\":[{},{},{\"indexes\":[]}]}}")
            .unwrap_err();
        assert!(err.to_string().contains("no index group"));
    }

    #[test]
    fn test_parse_with_invalid_date_code() {
        let service = ParseService::new(delivery_mapping());
        let doc = concat!(
            "{\"code\":0,\"content\":{\"resp_list\":[{},{},",
            "{\"indexes\":[{\"time_indexes\":[{\"time\":20241399,\"score\":1}]}]}",
            "]}}"
        );
        let err = service.parse(doc).unwrap_err();
        assert!(err.to_string().contains("invalid date code"));
        // The raw code value stays out of the message
        assert!(!err.to_string().contains("20241399"));
    }

    #[test]
    fn test_parse_keeps_platform_without_samples() {
        let service = ParseService::new(delivery_mapping());
        let doc = concat!(
            "{\"code\":0,\"content\":{\"resp_list\":[{},{},",
            "{\"indexes\":[{\"time_indexes\":[]}]}",
            "]}}"
        );
        let data_set = service.parse(doc).unwrap();

        assert_eq!(data_set.platforms.len(), 1);
        assert!(data_set.platforms[0].is_empty());
        assert_eq!(data_set.platforms[0].avg_score, 0.0);
        assert!(data_set.date_range.is_none());
    }

    #[test]
    fn test_parse_preserves_configuration_order() {
        let mappings = vec![
            PlatformMapping {
                position: 1,
                name: "饿了么".to_string(),
                color: "#0078FF".to_string(),
            },
            PlatformMapping {
                position: 0,
                name: "美团外卖".to_string(),
                color: "#FF6600".to_string(),
            },
        ];
        let doc = concat!(
            "{\"code\":0,\"content\":{\"resp_list\":[",
            "{\"indexes\":[{\"time_indexes\":[{\"time\":20240101,\"score\":1}]}]},",
            "{\"indexes\":[{\"time_indexes\":[{\"time\":20240101,\"score\":2}]}]}",
            "]}}"
        );

        let data_set = ParseService::new(mappings).parse(doc).unwrap();
        assert_eq!(data_set.platforms[0].name, "饿了么");
        assert_eq!(data_set.platforms[0].samples[0].score, 2.0);
        assert_eq!(data_set.platforms[1].name, "美团外卖");
        assert_eq!(data_set.platforms[1].samples[0].score, 1.0);
    }

    #[test]
    fn test_validate_format() {
        assert!(validate_format(
            "header line\n{\"code\":0,\"content\":{\"resp_list\":[]}}"
        ));
        assert!(!validate_format("no payload in sight"));
        assert!(!validate_format("{\"code\":0,\"content\":{\"resp_list\":"));
    }
}
