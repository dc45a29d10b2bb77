use std::fmt;

use super::format::{fixed, num, num_list, quoted, rapid_bool};
use crate::{LoadData, Pose, RapidError, SpeedData, ToolData, WorkObjectData, ZoneData};

impl Pose {
    pub fn new(trans: [f64; 3], rot: [f64; 4]) -> Self {
        Self { trans, rot }
    }

    /// Builds a pose from a 3-value position and a 4-value quaternion.
    pub fn from_slices(trans: &[f64], rot: &[f64]) -> Result<Self, RapidError> {
        Ok(Self {
            trans: fixed("frame position", trans)?,
            rot: fixed("frame orientation", rot)?,
        })
    }
}

/// `[[x,y,z],[q1,q2,q3,q4]]`
impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", num_list(&self.trans), num_list(&self.rot))
    }
}

impl LoadData {
    pub fn from_slices(mass: f64, cog: &[f64], aom: &[f64], inertia: &[f64]) -> Result<Self, RapidError> {
        Ok(Self {
            mass,
            cog: fixed("load center of gravity", cog)?,
            aom: fixed("load orientation", aom)?,
            inertia: fixed("load inertia", inertia)?,
        })
    }
}

/// `[mass,[cx,cy,cz],[q1,q2,q3,q4],ix,iy,iz]`
impl fmt::Display for LoadData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{},{},{},{},{},{}]",
            num(self.mass),
            num_list(&self.cog),
            num_list(&self.aom),
            num(self.inertia[0]),
            num(self.inertia[1]),
            num(self.inertia[2]),
        )
    }
}

impl ToolData {
    pub fn new(name: &str, rob_hold: bool, tframe: Pose, tload: LoadData) -> Self {
        Self {
            name: name.to_string(),
            rob_hold,
            tframe,
            tload,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn from_slices(
        name: &str,
        rob_hold: bool,
        frame_pos: &[f64],
        frame_orient: &[f64],
        load_mass: f64,
        load_cog: &[f64],
        load_orient: &[f64],
        load_inertia: &[f64],
    ) -> Result<Self, RapidError> {
        Ok(Self::new(
            name,
            rob_hold,
            Pose::from_slices(frame_pos, frame_orient)?,
            LoadData::from_slices(load_mass, load_cog, load_orient, load_inertia)?,
        ))
    }
}

impl fmt::Display for ToolData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VAR tooldata {}:=[{},{},{}];",
            self.name,
            rapid_bool(self.rob_hold),
            self.tframe,
            self.tload
        )
    }
}

impl ZoneData {
    pub fn new(name: &str, zone: crate::Zone) -> Self {
        Self {
            name: name.to_string(),
            zone,
        }
    }
}

impl fmt::Display for ZoneData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VAR zonedata {}:={};", self.name, self.zone)
    }
}

impl fmt::Display for SpeedData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VAR speeddata {}:={};",
            self.name,
            num_list(&[self.v_tcp, self.v_ori, self.v_leax, self.v_reax])
        )
    }
}

impl WorkObjectData {
    pub fn new(name: &str, rob_hold: bool, uf_prog: bool, uf_mec: &str, uframe: Pose, oframe: Pose) -> Self {
        Self {
            name: name.to_string(),
            rob_hold,
            uf_prog,
            uf_mec: uf_mec.to_string(),
            uframe,
            oframe,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn from_slices(
        name: &str,
        rob_hold: bool,
        uf_prog: bool,
        uf_mec: &str,
        uf_pos: &[f64],
        uf_orient: &[f64],
        of_pos: &[f64],
        of_orient: &[f64],
    ) -> Result<Self, RapidError> {
        Ok(Self::new(
            name,
            rob_hold,
            uf_prog,
            uf_mec,
            Pose::from_slices(uf_pos, uf_orient)?,
            Pose::from_slices(of_pos, of_orient)?,
        ))
    }
}

impl fmt::Display for WorkObjectData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VAR wobjdata {}:=[{},{},{},{},{}];",
            self.name,
            rapid_bool(self.rob_hold),
            rapid_bool(self.uf_prog),
            quoted(&self.uf_mec),
            self.uframe,
            self.oframe
        )
    }
}
