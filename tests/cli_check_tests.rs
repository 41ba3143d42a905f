//! End-to-end tests for `mapcolor check`.

mod fixtures;
use fixtures::*;

#[test]
fn test_check_matching_solution() {
    let output = run_mapcolor(&[
        "check",
        "--assign",
        "Lào=đỏ,Trung Quốc=xanh dương,Việt Nam=xanh lá,Thái Lan=xanh dương,Campuchia=đỏ",
        "--json",
    ]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let json = stdout_json(&output);
    assert_eq!(json["comparison"], "match");
    assert_eq!(json["complete"], true);
    assert_eq!(json["colors_used"], 3);
    assert_eq!(json["baseline_colors"], 3);

    let steps = json["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 5);
    assert!(steps.iter().all(|s| s["accepted"] == true));

    // The last step also announces completion
    let last = steps[4]["notifications"].as_array().unwrap();
    assert_eq!(last.len(), 2);
    assert!(last[1]["message"]
        .as_str()
        .unwrap()
        .contains("Congratulations"));
}

#[test]
fn test_check_conflict_is_reported() {
    let output = run_mapcolor(&["check", "--assign", "Lào=đỏ,Thái Lan=đỏ", "--json"]);

    assert_eq!(output.status.code(), Some(1));
    let json = stdout_json(&output);
    let steps = json["steps"].as_array().unwrap();
    assert_eq!(steps[0]["accepted"], true);
    assert_eq!(steps[1]["accepted"], false);

    let notice = &steps[1]["notifications"][0];
    assert_eq!(notice["severity"], "error");
    let message = notice["message"].as_str().unwrap();
    assert!(message.contains("Thái Lan"));
    assert!(message.contains("Lào"));
    assert!(message.contains("đỏ"));
    assert_eq!(json["comparison"], "unknown");
}

#[test]
fn test_check_already_colored_is_info() {
    let output = run_mapcolor(&["check", "--assign", "Lào=đỏ,Lào=vàng", "--json"]);

    assert_eq!(output.status.code(), Some(1));
    let json = stdout_json(&output);
    let notice = &json["steps"][1]["notifications"][0];
    assert_eq!(notice["severity"], "info");
    assert!(notice["message"]
        .as_str()
        .unwrap()
        .contains("already colored"));
}

#[test]
fn test_check_mismatch_with_four_colors() {
    let output = run_mapcolor(&[
        "check",
        "--assign",
        "Việt Nam=#f87171,Lào=#60a5fa,Trung Quốc=#34d399,Campuchia=#facc15,Thái Lan=#f87171",
    ]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Colors used: 4 (greedy baseline: 3)"));
    assert!(stdout.contains("differs from the greedy algorithm"));
}

#[test]
fn test_check_unknown_region_is_rejected() {
    let output = run_mapcolor(&["check", "--assign", "Myanmar=đỏ", "--json"]);

    assert_eq!(output.status.code(), Some(1));
    let json = stdout_json(&output);
    assert_eq!(json["steps"][0]["accepted"], false);
    assert!(json["steps"][0]["notifications"][0]["message"]
        .as_str()
        .unwrap()
        .contains("not on this map"));
}

#[test]
fn test_check_invalid_syntax() {
    let output = run_mapcolor(&["check", "--assign", "Lào"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Region=color"));

    let output = run_mapcolor(&["check", "--assign", "Lào=magenta"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown color"));
}
