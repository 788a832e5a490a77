//! Defines the auxiliary "predicted node id" outputs
//! registered when winner ids are requested.
use serde::{Serialize, Deserialize};

use crate::error::{ConversionError, Result};
use crate::schema::DataType;
use super::tree_model::TreeModel;
use super::mining_model::MiningModel;


/// Name of the winning node id output.
pub const NODE_ID: &str = "nodeId";


/// An output field that reports the id of the winning node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputField {
    /// Output field name.
    pub name: String,
    /// Data type of the reported id.
    pub data_type: DataType,
    /// The segment this field reports on, for ensembles.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub segment_id: Option<String>,
}


/// The auxiliary outputs of a model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Output {
    /// Output fields in order.
    pub fields: Vec<OutputField>,
}


impl Output {
    /// Returns the field named `name`, if any.
    #[inline]
    pub fn field(&self, name: &str) -> Option<&OutputField> {
        self.fields.iter().find(|f| f.name == name)
    }
}


/// Register the winning node id output on a single tree.
pub(crate) fn encode_apply_output(model: &mut TreeModel, data_type: DataType) {
    let field = OutputField {
        name: NODE_ID.to_string(),
        data_type,
        segment_id: None,
    };

    model.output
        .get_or_insert_with(Output::default)
        .fields
        .push(field);
}


/// Register one winning node id output per segment.
/// Every segment must have an id; nothing is registered otherwise.
pub(crate) fn encode_multi_apply_output(
    model: &mut MiningModel,
    data_type: DataType,
) -> Result<()>
{
    let segment_ids = model.segmentation.segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            segment.id.clone()
                .ok_or(ConversionError::MissingSegmentId { position: i + 1 })
        })
        .collect::<Result<Vec<_>>>()?;


    let output = model.output.get_or_insert_with(Output::default);
    for segment_id in segment_ids {
        output.fields.push(OutputField {
            name: format!("{NODE_ID}({segment_id})"),
            data_type,
            segment_id: Some(segment_id),
        });
    }

    Ok(())
}
