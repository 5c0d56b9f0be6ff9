use serde::{Deserialize, Serialize};

use crate::models::{Edges, Station, StationDetails, StationGraph, Stations};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointGeometry {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// `[longitude, latitude]`
    #[serde(default)]
    pub coordinates: Option<Vec<f64>>,
}

/// Property bag of a station feature. Any key may be missing or `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub station_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub details: StationDetails,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StationFeature {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub geometry: Option<PointGeometry>,
    #[serde(default)]
    pub properties: Option<StationProperties>,
}

impl StationFeature {
    /// `(longitude, latitude)`, or `None` when the geometry is incomplete
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match self.geometry.as_ref()?.coordinates.as_deref()? {
            [lon, lat, ..] => Some((*lon, *lat)),
            _ => None,
        }
    }

    #[must_use]
    pub fn station_code(&self) -> Option<&str> {
        self.properties
            .as_ref()?
            .station_code
            .as_deref()
            .filter(|code| !code.is_empty())
    }

    /// A feature without a station code or coordinates has no station
    fn to_station(&self) -> Option<Station> {
        let code = self.station_code()?;
        let coordinates = self.coordinates()?;
        let properties = self.properties.as_ref()?;
        let station = Station::new(code, properties.name.clone().unwrap_or_default(), coordinates)
            .with_description(properties.description.clone().unwrap_or_default())
            .with_details(properties.details.clone());
        Some(station)
    }

    fn from_station(station: &Station) -> Self {
        Self {
            kind: Some("Feature".to_string()),
            geometry: Some(PointGeometry {
                kind: Some("Point".to_string()),
                coordinates: Some(vec![station.coordinates.0, station.coordinates.1]),
            }),
            properties: Some(StationProperties {
                station_code: Some(station.code.clone()),
                name: Some(station.name.clone()),
                description: Some(station.description.clone()),
                details: station.details.clone(),
            }),
        }
    }
}

/// The station feature collection, optionally carrying the connections
/// drawn by the user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StationDataset {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub features: Vec<StationFeature>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connections: Option<Vec<(String, String)>>,
}

impl StationDataset {
    /// Build the station network: every usable feature in order, then every
    /// stored connection. Duplicate codes keep their first occurrence and
    /// connections naming unknown stations are dropped.
    #[must_use]
    pub fn build_graph(&self) -> StationGraph {
        let mut graph = StationGraph::new();
        let mut skipped = 0usize;

        for feature in &self.features {
            match feature.to_station() {
                Some(station) => {
                    graph.add_station(station);
                }
                None => {
                    skipped += 1;
                    crate::log!(
                        "Skipping feature {} without a station code or usable coordinates",
                        feature.station_code().unwrap_or("<unnamed>")
                    );
                }
            }
        }

        let mut connected = 0usize;
        for (start, end) in self.connections.iter().flatten() {
            if graph.add_edge(start, end) {
                connected += 1;
            }
        }

        crate::log!(
            "Loaded {} stations ({} skipped) and {} connections",
            graph.station_count(),
            skipped,
            connected
        );
        graph
    }

    /// Dataset describing `graph`, with one entry per connection
    #[must_use]
    pub fn from_graph(graph: &StationGraph) -> Self {
        Self {
            kind: Some("FeatureCollection".to_string()),
            features: graph.stations().map(|(_, station)| StationFeature::from_station(station)).collect(),
            connections: Some(graph.unique_connections()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [-2.2309, 53.4774] },
                "properties": {
                    "stationCode": "PCG",
                    "name": "Piccadilly Gardens",
                    "description": "Piccadilly Gardens Metrolink",
                    "currentStatus": "Operational",
                    "ticketZone": "1",
                    "validFrom": "2019-01-01",
                    "stroke": "#ffcc00"
                }
            },
            {
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [-2.2423, 53.4809] },
                "properties": { "stationCode": "MKT", "name": "Market Street" }
            },
            {
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [] },
                "properties": { "stationCode": "BAD", "name": "No Geometry" }
            },
            {
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [0.0, 0.0] },
                "properties": { "stationCode": "PCG", "name": "Duplicate" }
            }
        ],
        "connections": [["PCG", "MKT"], ["MKT", "PCG"], ["PCG", "NOPE"]]
    }"##;

    fn sample() -> StationDataset {
        serde_json::from_str(SAMPLE).expect("sample parses")
    }

    #[test]
    fn test_build_graph() {
        let graph = sample().build_graph();

        assert_eq!(graph.station_count(), 2);
        assert!(graph.get_station("BAD").is_none());
        let pcg = graph.get_station("PCG").expect("PCG loaded");
        assert_eq!(pcg.name, "Piccadilly Gardens");
        assert_eq!(pcg.coordinates, (-2.2309, 53.4774));
        assert_eq!(pcg.details.ticket_zone, serde_json::json!("1"));
        assert_eq!(graph.unique_connections(), vec![("PCG".to_string(), "MKT".to_string())]);
    }

    #[test]
    fn test_null_properties_do_not_reject_dataset() {
        let raw = r#"{
            "features": [
                {
                    "geometry": { "coordinates": [-2.2423, 53.4809] },
                    "properties": { "stationCode": "MKT", "name": null, "description": null, "ticketZone": null }
                },
                {
                    "geometry": { "coordinates": [-2.2426, 53.4781] },
                    "properties": { "stationCode": null, "name": "No Code" }
                },
                {
                    "geometry": { "coordinates": [-2.2400, 53.4800] },
                    "properties": { "name": "Missing Code" }
                },
                { "geometry": null, "properties": { "stationCode": "NOGEO" } },
                { "geometry": { "coordinates": null }, "properties": null },
                {
                    "geometry": { "coordinates": [-2.2309, 53.4774] },
                    "properties": { "stationCode": "PCG", "name": "Piccadilly Gardens" }
                }
            ],
            "connections": [["MKT", "PCG"]]
        }"#;

        let dataset: StationDataset = serde_json::from_str(raw).expect("nulls are tolerated");
        let graph = dataset.build_graph();

        let codes: Vec<&str> = graph.stations().map(|(_, s)| s.code.as_str()).collect();
        assert_eq!(codes, vec!["MKT", "PCG"]);
        let market = graph.get_station("MKT").expect("MKT loaded");
        assert_eq!(market.name, "");
        assert_eq!(market.description, "");
        assert!(market.details.ticket_zone.is_null());
        assert_eq!(graph.unique_connections(), vec![("MKT".to_string(), "PCG".to_string())]);
    }

    #[test]
    fn test_missing_connections_is_empty_network() {
        let mut dataset = sample();
        dataset.connections = None;
        let graph = dataset.build_graph();
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_from_graph_keeps_shape() {
        let graph = sample().build_graph();
        let saved = StationDataset::from_graph(&graph);

        assert_eq!(saved.features.len(), 2);
        assert_eq!(saved.connections, Some(vec![("PCG".to_string(), "MKT".to_string())]));

        let json = serde_json::to_value(&saved).expect("serializes");
        let first = &json["features"][0];
        assert_eq!(first["properties"]["stationCode"], "PCG");
        assert_eq!(first["properties"]["stroke"], "#ffcc00");
        assert_eq!(first["geometry"]["coordinates"][1], 53.4774);
        assert_eq!(json["connections"][0][1], "MKT");
        // Unset dataset properties are not written back as nulls
        assert!(json["features"][1]["properties"].get("ticketZone").is_none());

        let reloaded = saved.build_graph();
        assert_eq!(reloaded.station_count(), graph.station_count());
        assert_eq!(reloaded.unique_connections(), graph.unique_connections());
    }
}
