use serde::{Deserialize, Serialize};

use super::scanner::Cursor;
use crate::{LoadData, Pose, ToolData, WorkObjectData};

/// A named declaration recognized on one line.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Declared<T> {
    pub name: String,
    pub value: T,
}

/// One field of a `zonedata` body. Numeric fields become `Number`, anything
/// else (`fine`, a named constant) is kept as written.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ZoneValue {
    Number(f64),
    Text(String),
}

impl ZoneValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ZoneValue::Number(n) => Some(*n),
            ZoneValue::Text(_) => None,
        }
    }
}

/// Body of a `tooldata` declaration, kept as the text between the outer
/// brackets.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RawToolData {
    pub raw: String,
}

/// Body of a `wobjdata` declaration, kept as the text between the outer
/// brackets.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RawWorkObjectData {
    pub raw: String,
}

fn pose(cur: &mut Cursor) -> Option<Pose> {
    cur.expect('[')?;
    let trans = cur.num_array::<3>()?;
    cur.expect(',')?;
    let rot = cur.num_array::<4>()?;
    cur.expect(']')?;
    Some(Pose { trans, rot })
}

impl RawToolData {
    /// Decomposes the body into a [`ToolData`] named `name`.
    ///
    /// Returns `None` when the body is not the plain literal form the
    /// encoder writes (for instance when it references other data by name).
    pub fn structured(&self, name: &str) -> Option<ToolData> {
        let mut cur = Cursor::new(&self.raw);
        let rob_hold = cur.boolean()?;
        cur.expect(',')?;
        let tframe = pose(&mut cur)?;
        cur.expect(',')?;
        cur.expect('[')?;
        let mass = cur.number()?;
        cur.expect(',')?;
        let cog = cur.num_array::<3>()?;
        cur.expect(',')?;
        let aom = cur.num_array::<4>()?;
        let mut inertia = [0.0; 3];
        for slot in inertia.iter_mut() {
            cur.expect(',')?;
            *slot = cur.number()?;
        }
        cur.expect(']')?;
        if !cur.at_end() {
            return None;
        }
        Some(ToolData::new(
            name,
            rob_hold,
            tframe,
            LoadData {
                mass,
                cog,
                aom,
                inertia,
            },
        ))
    }
}

impl RawWorkObjectData {
    /// Decomposes the body into a [`WorkObjectData`] named `name`, or
    /// `None` when it is not the plain literal form.
    pub fn structured(&self, name: &str) -> Option<WorkObjectData> {
        let mut cur = Cursor::new(&self.raw);
        let rob_hold = cur.boolean()?;
        cur.expect(',')?;
        let uf_prog = cur.boolean()?;
        cur.expect(',')?;
        let uf_mec = cur.string()?;
        cur.expect(',')?;
        let uframe = pose(&mut cur)?;
        cur.expect(',')?;
        let oframe = pose(&mut cur)?;
        if !cur.at_end() {
            return None;
        }
        Some(WorkObjectData::new(name, rob_hold, uf_prog, &uf_mec, uframe, oframe))
    }
}
