//! `MoveL`, `MoveJ` and `MoveAbsJ` with inline target literals.

use super::scanner::Cursor;
use crate::{MoveType, RobotTarget};

pub(crate) enum MoveLine {
    NotMove,
    Malformed,
    Target(RobotTarget),
}

pub(crate) fn parse_move(line: &str) -> MoveLine {
    let mut cur = Cursor::new(line);
    let move_type = match cur.ident() {
        Some("MoveL") => MoveType::MoveL,
        Some("MoveJ") => MoveType::MoveJ,
        Some("MoveAbsJ") => MoveType::MoveAbsJ,
        _ => return MoveLine::NotMove,
    };
    match move_body(&mut cur, move_type) {
        Some(target) => MoveLine::Target(target),
        None => MoveLine::Malformed,
    }
}

fn move_body(cur: &mut Cursor, move_type: MoveType) -> Option<RobotTarget> {
    let mut target = RobotTarget {
        move_type,
        ..RobotTarget::default()
    };

    cur.expect('[')?;
    if move_type == MoveType::MoveAbsJ {
        target.joints = Some(cur.num_array::<6>()?);
    } else {
        target.position = cur.num_array::<3>()?;
        cur.expect(',')?;
        target.orientation = cur.num_array::<4>()?;
        cur.expect(',')?;
        target.conf = cur.int_array::<4>()?;
    }
    cur.expect(',')?;
    target.ext_axes = cur.ext_axis_array()?;
    cur.expect(']')?;

    cur.expect(',')?;
    target.speed = cur.ident()?.to_string();
    cur.expect(',')?;
    target.zone = cur.ident()?.to_string();
    cur.expect(',')?;
    target.tool = cur.ident()?.to_string();

    if cur.eat('\\') {
        if !cur.ident()?.eq_ignore_ascii_case("wobj") || !cur.eat_str(":=") {
            return None;
        }
        target.wobj = Some(cur.ident()?.to_string());
    }

    cur.end_of_statement().then_some(target)
}
