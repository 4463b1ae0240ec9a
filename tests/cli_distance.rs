use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn command_distance() -> anyhow::Result<()> {
    let mut cmd = cargo_bin_cmd!("rearr");
    let output = cmd
        .arg("distance")
        .arg("tests/genome/sample.txt")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(stdout, "3\n");

    Ok(())
}

#[test]
fn command_distance_detail() -> anyhow::Result<()> {
    let mut cmd = cargo_bin_cmd!("rearr");
    let output = cmd
        .arg("distance")
        .arg("tests/genome/two_chrom.txt")
        .arg("--detail")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    // blocks, cycles, distance
    assert_eq!(stdout, "8\t4\t4\n");

    Ok(())
}

#[test]
fn command_distance_symmetric() -> anyhow::Result<()> {
    let mut cmd = cargo_bin_cmd!("rearr");
    cmd.arg("distance")
        .arg("stdin")
        .write_stdin("(+1 -3 -6 -5)(+2 -4)\n(+1 +2 +3 +4 +5 +6)\n")
        .assert()
        .success()
        .stdout("3\n");

    Ok(())
}

#[test]
fn command_distance_synteny() -> anyhow::Result<()> {
    let mut cmd = cargo_bin_cmd!("rearr");
    cmd.arg("distance")
        .arg("tests/genome/synteny.txt")
        .arg("--detail")
        .assert()
        .success()
        .stdout("10\t7\t3\n");

    Ok(())
}

#[test]
fn command_distance_duplicate_block() -> anyhow::Result<()> {
    let mut cmd = cargo_bin_cmd!("rearr");
    cmd.arg("distance")
        .arg("stdin")
        .write_stdin("(+1 +2 +2)\n(+1 +2 +3)\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Block 2 occurs more than once"));

    Ok(())
}

#[test]
fn command_distance_block_too_large() -> anyhow::Result<()> {
    let mut cmd = cargo_bin_cmd!("rearr");
    cmd.arg("distance")
        .arg("stdin")
        .write_stdin("(-9223372036854775808)\n(-9223372036854775808)\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Block 9223372036854775808 is too large"));

    Ok(())
}
