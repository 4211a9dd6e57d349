//! Translate a geoservice query into the SQL query and geometry filter we run.

mod fields;
mod filtering;
pub mod geo_shape;
mod sorting;
mod values;

use query_engine_metadata::metadata::{FieldBindings, Metadata};
use query_engine_sql::sql;

use super::error::Error;
use super::filters_applied::{self, FiltersApplied};
use super::geometry::{GeometryNormalizer, SpatialFilter, WGS84};
use super::request::{GeoserviceQuery, QueryRequest};

/// Everything needed to run a request and to describe its result.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPlan {
    pub execution_plan: sql::execution_plan::ExecutionPlan,
    /// The fields bound for the requested dataset.
    pub bindings: FieldBindings,
    pub filters_applied: FiltersApplied,
}

/// Translate a request into a plan. Does not touch the data store.
pub fn translate(
    metadata: &Metadata,
    request: &QueryRequest,
    normalizer: &dyn GeometryNormalizer,
) -> Result<QueryPlan, Error> {
    let dataset = &request.params.id;
    let query = &request.query;
    let bindings = metadata.bindings(dataset);

    let select = translate_select(query, &bindings, dataset);

    let filter = match (&bindings.geometry_field, &query.geometry) {
        (Some(geometry_field), Some(geometry)) => {
            let normalized = normalizer.normalize(&SpatialFilter {
                geometry,
                in_sr: query.in_sr.as_ref(),
                target_sr: WGS84,
                relation: query.spatial_rel.as_deref(),
            })?;
            Some(geo_shape::translate_geo_shape(geometry_field, &normalized))
        }
        _ => None,
    };

    let filters_applied = filters_applied::filters_applied(query, &bindings);

    tracing::debug!(
        dataset = %dataset,
        geometry_filter = filter.is_some(),
        "Translated query"
    );

    Ok(QueryPlan {
        execution_plan: sql::execution_plan::ExecutionPlan {
            fetch_size: query.fetch_size(),
            query: select,
            filter,
        },
        bindings,
        filters_applied,
    })
}

/// Build the SELECT statement: requested fields (plus the geometry field),
/// the dataset, attribute and object id predicates, and the sort order.
pub fn translate_select(
    query: &GeoserviceQuery,
    bindings: &FieldBindings,
    dataset: &query_engine_metadata::metadata::DatasetId,
) -> sql::ast::Select {
    sql::ast::Select {
        select_list: fields::translate_fields(&query.out_fields, bindings.geometry_field.as_ref()),
        from: sql::ast::From::Table {
            reference: sql::ast::TableName(dataset.to_string()),
        },
        where_: filtering::translate_where(
            query.where_.as_deref(),
            query.object_ids.as_deref(),
            bindings.id_field.as_ref(),
        ),
        order_by: sorting::translate_order_by(query.order_by_fields.as_deref()),
    }
}

/// Compile the SQL string of a query against a dataset.
pub fn compile_sql(
    query: &GeoserviceQuery,
    bindings: &FieldBindings,
    dataset: &query_engine_metadata::metadata::DatasetId,
) -> String {
    sql::convert::select_to_sql(&translate_select(query, bindings, dataset)).sql
}
