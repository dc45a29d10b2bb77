/// Checks the exact text the encoder writes for every statement kind.
use abb_rapid::{
    build_target_literal, PrintValue, RapidError, RapidProgram, SpeedData, ToolData,
    WorkObjectData, Zone,
};

fn lines(program: &RapidProgram) -> Vec<&str> {
    program.as_str().lines().collect()
}

#[test]
fn test_module_brackets() {
    let mut program = RapidProgram::new();
    program.open_module("MainModule", "main");
    program.close_module();
    assert_eq!(program.as_str(), "MODULE MainModule\nPROC main()\nENDPROC\nENDMODULE\n");
}

#[test]
fn test_default_declarations() {
    let mut program = RapidProgram::new();
    program.declare_tool(&ToolData::default());
    program.declare_zone("zone", Zone::Z10);
    program.declare_zone("zone_default", Zone::default());
    program.declare_speed(&SpeedData::default());
    program.declare_work_object(&WorkObjectData::default());

    assert_eq!(
        lines(&program),
        vec![
            "VAR tooldata tool:=[TRUE,[[0,0,0],[1,0,0,0]],[0,[0,0,0],[1,0,0,0],0,0,0]];",
            "VAR zonedata zone:=z10;",
            "VAR zonedata zone_default:=z0;",
            "VAR speeddata speed:=[50,50,0,0];",
            r#"VAR wobjdata wobj:=[FALSE,TRUE,"",[[0,0,0],[1,0,0,0]],[[0,0,0],[1,0,0,0]]];"#,
        ]
    );
}

#[test]
fn test_tool_from_slices() {
    let tool = ToolData::from_slices(
        "gripper",
        true,
        &[0.0, 0.0, 150.5],
        &[1.0, 0.0, 0.0, 0.0],
        2.5,
        &[0.0, 0.0, 75.0],
        &[1.0, 0.0, 0.0, 0.0],
        &[0.01, 0.02, 0.03],
    )
    .unwrap();
    assert_eq!(
        tool.to_string(),
        "VAR tooldata gripper:=[TRUE,[[0,0,150.5],[1,0,0,0]],[2.5,[0,0,75],[1,0,0,0],0.01,0.02,0.03]];"
    );
}

#[test]
fn test_slice_length_mismatch_is_invalid_argument() {
    let err = ToolData::from_slices(
        "tool",
        true,
        &[0.0, 0.0],
        &[1.0, 0.0, 0.0, 0.0],
        0.0,
        &[0.0, 0.0, 0.0],
        &[1.0, 0.0, 0.0, 0.0],
        &[0.0, 0.0, 0.0],
    )
    .unwrap_err();
    assert!(matches!(err, RapidError::InvalidArgument(_)));

    let err = WorkObjectData::from_slices(
        "wobj",
        false,
        true,
        "",
        &[0.0, 0.0, 0.0],
        &[1.0, 0.0, 0.0],
        &[0.0, 0.0, 0.0],
        &[1.0, 0.0, 0.0, 0.0],
    )
    .unwrap_err();
    assert!(matches!(err, RapidError::InvalidArgument(_)));
}

#[test]
fn test_linear_move_without_work_object() {
    let mut program = RapidProgram::new();
    program
        .add_linear_move(
            &[1.0, 2.0, 3.0],
            &[1.0, 0.0, 0.0, 0.0],
            &[0, 0, 0, 1],
            &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            "speed",
            "zone",
            "tool",
        )
        .unwrap();
    assert_eq!(
        program.as_str(),
        "MoveL [[1,2,3],[1,0,0,0],[0,0,0,1],[0,0,0,0,0,0]], speed, zone, tool;\n"
    );
}

#[test]
fn test_work_object_is_referenced_by_later_moves() {
    let mut program = RapidProgram::new();
    program
        .add_joint_move(&[0.0; 3], &[1.0, 0.0, 0.0, 0.0], &[0, 0, 0, 1], &[0.0; 6], "v100", "z10", "tool0")
        .unwrap();
    program.declare_work_object(&WorkObjectData {
        name: "table".to_string(),
        ..WorkObjectData::default()
    });
    assert_eq!(program.active_work_object(), Some("table"));
    program
        .add_joint_move(&[0.0; 3], &[1.0, 0.0, 0.0, 0.0], &[0, 0, 0, 1], &[0.0; 6], "v100", "z10", "tool0")
        .unwrap();
    program
        .add_absolute_joint_move(&[0.0, 0.0, 0.0, 0.0, 90.0, 0.0], &[0.0; 6], "v100", "fine", "tool0")
        .unwrap();
    program.clear_work_object();
    program
        .add_linear_move(&[0.0; 3], &[1.0, 0.0, 0.0, 0.0], &[0, 0, 0, 1], &[0.0; 6], "v100", "z10", "tool0")
        .unwrap();

    let lines = lines(&program);
    assert_eq!(lines[0], "MoveJ [[0,0,0],[1,0,0,0],[0,0,0,1],[0,0,0,0,0,0]], v100, z10, tool0;");
    assert_eq!(lines[2], "MoveJ [[0,0,0],[1,0,0,0],[0,0,0,1],[0,0,0,0,0,0]], v100, z10, tool0\\Wobj:=table;");
    assert_eq!(lines[3], "MoveAbsJ [[0,0,0,0,90,0], [0,0,0,0,0,0]], v100, fine, tool0\\Wobj:=table;");
    assert_eq!(lines[4], "MoveL [[0,0,0],[1,0,0,0],[0,0,0,1],[0,0,0,0,0,0]], v100, z10, tool0;");
}

#[test]
fn test_failed_move_leaves_buffer_untouched() {
    let mut program = RapidProgram::new();
    program.add_comment("start");
    let err = program
        .add_linear_move(&[0.0; 3], &[1.0, 0.0, 0.0, 0.0], &[0, 0, 1], &[0.0; 6], "v100", "z10", "tool0")
        .unwrap_err();
    assert!(matches!(err, RapidError::InvalidArgument(_)));
    assert!(program
        .add_absolute_joint_move(&[0.0; 5], &[0.0; 6], "v100", "z10", "tool0")
        .is_err());
    assert_eq!(program.as_str(), "! start\n");
}

#[test]
fn test_target_literal_with_unused_axes() {
    let literal = build_target_literal(
        &[10.5, -20.0, 300.0],
        &[0.0, 0.0, 1.0, 0.0],
        &[-1, 0, -2, 1],
        &[f64::INFINITY, 0.0, 9E9, 0.0, 0.0, f64::INFINITY],
    )
    .unwrap();
    assert_eq!(literal, "[[10.5,-20,300],[0,0,1,0],[-1,0,-2,1],[9E9,0,9000000000,0,0,9E9]]");

    assert!(build_target_literal(&[0.0; 3], &[1.0, 0.0, 0.0, 0.0], &[0; 4], &[0.0; 7]).is_err());
}

#[test]
fn test_io_statements() {
    let mut program = RapidProgram::new();
    program.add_wait(1.5);
    program.add_wait_digital_input("di_ready", 1);
    program.set_digital_output("do_gripper", 0);
    program.set_analog_output("ao_speed", 42.0);
    program.add_comment("move to home");

    assert_eq!(
        lines(&program),
        vec![
            "WaitTime 1.5;",
            "WaitDI di_ready, 1;",
            "SetDO do_gripper, 0;",
            "SetAO ao_speed, 42;",
            "! move to home",
        ]
    );
}

#[test]
fn test_print_statement_by_value_kind() {
    let mut program = RapidProgram::new();
    program.add_print_statement("Hello", PrintValue::Absent);
    program.add_print_statement("Ready", true);
    program.add_print_statement("Busy", false);
    program.add_print_statement("Count", 42_i64);
    program.add_print_statement("Ratio", 0.25);
    program.add_print_statement("Status", "ok");
    program.add_print_statement("Maybe", None::<i64>);

    assert_eq!(
        lines(&program),
        vec![
            r#"TPWrite "Hello";"#,
            r#"TPWrite "Ready"\Bool:=TRUE;"#,
            r#"TPWrite "Busy"\Bool:=FALSE;"#,
            r#"TPWrite "Count"\Num:=42;"#,
            r#"TPWrite "Ratio"\Dnum:=0.25;"#,
            r#"TPWrite "Status ok";"#,
            r#"TPWrite "Maybe";"#,
        ]
    );
}

#[test]
fn test_quotes_in_strings_are_doubled() {
    let mut program = RapidProgram::new();
    program.add_print_statement(r#"say "hi""#, PrintValue::Absent);
    assert_eq!(program.as_str(), "TPWrite \"say \"\"hi\"\"\";\n");
}

#[test]
fn test_print_value_from_json() {
    use serde_json::json;

    assert_eq!(PrintValue::try_from(json!(null)).unwrap(), PrintValue::Absent);
    assert_eq!(PrintValue::try_from(json!(true)).unwrap(), PrintValue::Bool(true));
    assert_eq!(PrintValue::try_from(json!(7)).unwrap(), PrintValue::Int(7));
    assert_eq!(PrintValue::try_from(json!(1.5)).unwrap(), PrintValue::Float(1.5));
    assert_eq!(PrintValue::try_from(json!("x")).unwrap(), PrintValue::Str("x".to_string()));

    let err = PrintValue::try_from(json!([1, 2])).unwrap_err();
    assert!(matches!(err, RapidError::UnsupportedType(_)));
    let err = PrintValue::try_from(json!({"a": 1})).unwrap_err();
    assert!(matches!(err, RapidError::UnsupportedType(_)));
}

#[test]
fn test_persist_writes_buffer_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("MainModule.mod");

    let mut program = RapidProgram::new();
    program.open_module("MainModule", "main");
    program.add_wait(0.5);
    program.close_module();
    program.persist(&path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, program.as_str());
}

#[test]
fn test_persist_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("out.mod");

    let program = RapidProgram::new();
    let err = program.persist(&path).unwrap_err();
    assert!(matches!(err, RapidError::NotFound(_) | RapidError::Io(_)));
}
