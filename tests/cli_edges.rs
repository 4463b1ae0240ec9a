use assert_cmd::cargo::cargo_bin_cmd;

#[test]
fn command_edges() -> anyhow::Result<()> {
    let mut cmd = cargo_bin_cmd!("rearr");
    let output = cmd
        .arg("edges")
        .arg("stdin")
        .write_stdin("(+1 -2 -3)(+4 +5 -6)\n")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(stdout, "(2, 4), (3, 6), (5, 1), (8, 9), (10, 12), (11, 7)\n");

    Ok(())
}

#[test]
fn command_edges_file() -> anyhow::Result<()> {
    let mut cmd = cargo_bin_cmd!("rearr");
    let output = cmd.arg("edges").arg("tests/genome/sample.txt").output()?;
    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "(2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 1)");
    assert_eq!(lines[1], "(2, 6), (5, 12), (11, 10), (9, 1), (4, 8), (7, 3)");

    Ok(())
}
