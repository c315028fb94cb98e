//! The extracted result bundle handed to the host.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::attributes::{NormalTable, ScalarMetrics};
use crate::error::ShapeWarning;
use crate::guard::EngineRef;
use crate::table::FacetTable;

/// One field of a [`HullBundle`], as seen by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BundleField<'a> {
    /// The facet index table.
    Table(&'a FacetTable),
    /// A whole-hull scalar metric.
    Scalar(f64),
    /// The per-facet hyperplane table.
    Normals(&'a NormalTable),
}

/// Everything one successful extraction produced.
///
/// The facet index table is always present; the scalars and the
/// normals table only when the run computed them. Hosts see the fields
/// in a fixed order (`hull`, `area`, `vol`, `normals`, absent ones
/// skipped), and a bundle with no optional field at all serializes as
/// the bare table with no wrapping.
///
/// The bundle also pins the engine session it was extracted from, so
/// engine-side hull state stays queryable for as long as the bundle
/// (or any clone of its [`EngineRef`]) is alive.
#[derive(Debug)]
pub struct HullBundle {
    hull: FacetTable,
    area: Option<f64>,
    volume: Option<f64>,
    normals: Option<NormalTable>,
    engine: EngineRef,
    warnings: Vec<ShapeWarning>,
}

impl HullBundle {
    pub(crate) fn assemble(
        hull: FacetTable,
        metrics: ScalarMetrics,
        normals: Option<NormalTable>,
        engine: EngineRef,
        warnings: Vec<ShapeWarning>,
    ) -> Self {
        Self {
            hull,
            area: metrics.area(),
            volume: metrics.volume(),
            normals,
            engine,
            warnings,
        }
    }

    /// The facet index table.
    #[inline]
    pub fn hull(&self) -> &FacetTable {
        &self.hull
    }

    /// Total surface area, when the run computed it.
    #[inline]
    pub fn area(&self) -> Option<f64> {
        self.area
    }

    /// Total enclosed volume, when the run computed it.
    #[inline]
    pub fn volume(&self) -> Option<f64> {
        self.volume
    }

    /// The per-facet hyperplane table, when normal output was
    /// requested.
    #[inline]
    pub fn normals(&self) -> Option<&NormalTable> {
        self.normals.as_ref()
    }

    /// The engine session this bundle was extracted from.
    #[inline]
    pub fn engine(&self) -> &EngineRef {
        &self.engine
    }

    /// Shape warnings recorded during the walk, in observation order.
    #[inline]
    pub fn warnings(&self) -> &[ShapeWarning] {
        &self.warnings
    }

    /// Returns `true` when the bundle carries nothing beyond the facet
    /// index table.
    pub fn is_bare(&self) -> bool {
        self.area.is_none() && self.volume.is_none() && self.normals.is_none()
    }

    /// The present fields in host order.
    pub fn fields(&self) -> Vec<(&'static str, BundleField<'_>)> {
        let mut fields = vec![("hull", BundleField::Table(&self.hull))];
        if let Some(area) = self.area {
            fields.push(("area", BundleField::Scalar(area)));
        }
        if let Some(volume) = self.volume {
            fields.push(("vol", BundleField::Scalar(volume)));
        }
        if let Some(normals) = &self.normals {
            fields.push(("normals", BundleField::Normals(normals)));
        }
        fields
    }

    /// Looks a field up by its host name.
    pub fn field(&self, name: &str) -> Option<BundleField<'_>> {
        match name {
            "hull" => Some(BundleField::Table(&self.hull)),
            "area" => self.area.map(BundleField::Scalar),
            "vol" => self.volume.map(BundleField::Scalar),
            "normals" => self.normals.as_ref().map(BundleField::Normals),
            _ => None,
        }
    }

    /// Unwraps the bundle into its facet index table.
    ///
    /// Drops the engine reference, so the backing session is released
    /// here if this bundle held the last one.
    pub fn into_table(self) -> FacetTable {
        self.hull
    }
}

impl Serialize for HullBundle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_bare() {
            return self.hull.serialize(serializer);
        }
        let fields = self.fields();
        let mut map = serializer.serialize_map(Some(fields.len()))?;
        for (name, field) in fields {
            match field {
                BundleField::Table(table) => map.serialize_entry(name, table)?,
                BundleField::Scalar(value) => map.serialize_entry(name, &value)?,
                BundleField::Normals(normals) => map.serialize_entry(name, normals)?,
            }
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use hull_engine::{
        EngineRequest, Facet, FacetMode, HullEngine, PointSet, ScriptedEngine,
    };

    use crate::attributes::build_normal_table;
    use crate::guard::HandleGuard;
    use crate::table::build_facet_table;

    use super::*;

    fn engine_ref() -> EngineRef {
        let engine = ScriptedEngine::new(2).with_facet(&[1, 2]);
        let points = PointSet::from_rows(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]);
        let request = EngineRequest::new(&points, "Tv", Path::new("/tmp"), FacetMode::Triangulated);
        HandleGuard::open(engine.invoke(&request).session).commit()
    }

    fn square_table() -> FacetTable {
        let facets = vec![Facet::new(vec![1, 2]), Facet::new(vec![3, 4])];
        build_facet_table(&facets, FacetMode::Triangulated, 2, 4)
            .unwrap()
            .0
    }

    fn metrics(area: f64, volume: f64) -> ScalarMetrics {
        let engine = ScriptedEngine::new(2).with_area(area).with_volume(volume);
        let points = PointSet::from_rows(&[[0.0, 0.0]]);
        let request = EngineRequest::new(&points, "", Path::new("/tmp"), FacetMode::Triangulated);
        let mut launch = engine.invoke(&request);
        let metrics = ScalarMetrics::read(launch.session.as_ref());
        launch.session.release();
        metrics
    }

    #[test]
    fn test_bare_bundle_is_just_the_table() {
        let bundle = HullBundle::assemble(
            square_table(),
            metrics(0.0, 0.0),
            None,
            engine_ref(),
            Vec::new(),
        );

        assert!(bundle.is_bare());
        assert_eq!(bundle.fields().len(), 1);
        assert_eq!(bundle.into_table(), square_table());
    }

    #[test]
    fn test_fields_keep_host_order() {
        let normals = build_normal_table(
            &[
                Facet::new(vec![1, 2]).with_normal(vec![0.0, -1.0], 0.0),
                Facet::new(vec![3, 4]).with_normal(vec![0.0, 1.0], -1.0),
            ],
            2,
        )
        .unwrap();
        let bundle = HullBundle::assemble(
            square_table(),
            metrics(4.0, 1.0),
            Some(normals),
            engine_ref(),
            Vec::new(),
        );

        let names: Vec<&str> = bundle.fields().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["hull", "area", "vol", "normals"]);
    }

    #[test]
    fn test_absent_fields_are_skipped_not_nulled() {
        let bundle = HullBundle::assemble(
            square_table(),
            metrics(0.0, 2.5),
            None,
            engine_ref(),
            Vec::new(),
        );

        let names: Vec<&str> = bundle.fields().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["hull", "vol"]);
        assert!(bundle.field("area").is_none());
        assert_eq!(bundle.field("vol"), Some(BundleField::Scalar(2.5)));
        assert!(bundle.field("centrum").is_none());
    }

    #[test]
    fn test_bare_bundle_serializes_without_wrapping() {
        let bundle = HullBundle::assemble(
            square_table(),
            metrics(0.0, 0.0),
            None,
            engine_ref(),
            Vec::new(),
        );

        let json = serde_json::to_string(&bundle).unwrap();
        let table_json = serde_json::to_string(&square_table()).unwrap();
        assert_eq!(json, table_json);
        assert!(!json.contains("\"hull\""));
    }

    #[test]
    fn test_tagged_bundle_serializes_fields_in_order() {
        let bundle = HullBundle::assemble(
            square_table(),
            metrics(4.0, 1.0),
            None,
            engine_ref(),
            Vec::new(),
        );

        let json = serde_json::to_string(&bundle).unwrap();
        let hull = json.find("\"hull\"").unwrap();
        let area = json.find("\"area\"").unwrap();
        let vol = json.find("\"vol\"").unwrap();
        assert!(hull < area);
        assert!(area < vol);
        assert!(!json.contains("\"normals\""));
    }

    #[test]
    fn test_sentinels_serialize_as_null() {
        let facets = vec![Facet::new(vec![1])];
        let (table, _) = build_facet_table(&facets, FacetMode::Triangulated, 2, 1).unwrap();
        let bundle =
            HullBundle::assemble(table, metrics(0.0, 0.0), None, engine_ref(), Vec::new());

        let json = serde_json::to_string(&bundle).unwrap();
        assert!(json.contains("\"cells\":[1,null]"));
    }

    #[test]
    fn test_warnings_ride_along_without_serializing() {
        let warnings = vec![ShapeWarning::ShortFacet {
            facet: 0,
            vertices: 1,
            dimension: 2,
        }];
        let bundle = HullBundle::assemble(
            square_table(),
            metrics(4.0, 0.0),
            None,
            engine_ref(),
            warnings.clone(),
        );

        assert_eq!(bundle.warnings(), warnings.as_slice());
        let json = serde_json::to_string(&bundle).unwrap();
        assert!(!json.contains("warnings"));
    }
}
