use clap::Parser;
use serde_json::Value;
use sphere_viz::{Command, Error};

fn run(args: &[&str], output: &std::path::Path) -> Value {
	let mut full = vec!["sphere-viz"];
	full.extend_from_slice(args);
	full.extend_from_slice(&["--output", output.to_str().unwrap()]);
	Command::try_parse_from(full).unwrap().run().unwrap();
	serde_json::from_reader(std::fs::File::open(output).unwrap()).unwrap()
}

#[test]
fn slice_writes_frames() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("slice.json");
	let document = run(
		&[
			"slice",
			"--resolution",
			"40x21",
			"--duration",
			"1",
			"--fps",
			"10",
			"--dot-radius",
			"0.03",
			"--points",
		],
		&path,
	);

	assert_eq!(document["settings"]["dot_radius"].as_f64().unwrap() as f32, 0.03);
	assert_eq!(document["settings"]["projection"], "flat");
	assert_eq!(document["resolution"], serde_json::json!([40, 21]));

	let frames = document["frames"].as_array().unwrap();
	assert_eq!(frames.len(), 11);
	assert_eq!(frames[0]["cursor"], -1.0);
	assert_eq!(frames[0]["hit"], true);
	assert_eq!(frames[10]["cursor"], 1.0);

	let statistics = &document["statistics"];
	assert_eq!(statistics["samples"], 40 * 21);
	assert_eq!(statistics["frames"], 11);
	assert_eq!(
		statistics["hits"].as_u64().unwrap() + statistics["misses"].as_u64().unwrap(),
		11
	);

	for frame in frames {
		let display = frame["display"].as_array().unwrap();
		assert_eq!(display.len() as u64, frame["points"].as_u64().unwrap());
		for point in display {
			assert_eq!(point["radius"].as_f64().unwrap() as f32, 0.03);
			assert_eq!(point["position"][2], 0.0);
		}
	}
}

#[test]
fn slice_without_points() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("slice.json");
	let document = run(
		&["slice", "--resolution", "10x10", "--duration", "0.5", "--fps", "4", "--colors", "#ffffff"],
		&path,
	);
	let frames = document["frames"].as_array().unwrap();
	assert_eq!(frames.len(), 3);
	assert!(frames.iter().all(|frame| frame.get("display").is_none()));
}

#[test]
fn hypersphere_scales() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("hypersphere.json");
	let document = run(
		&["hypersphere", "--resolution", "11x6", "--fps", "5", "--rotate"],
		&path,
	);
	let frames = document["frames"].as_array().unwrap();
	assert_eq!(frames.len(), 11);
	assert_eq!(frames[0]["scale"], 1.0);
	assert_eq!(frames[10]["scale"], 2.0);
	assert!((frames[10]["extent"].as_f64().unwrap() - 2.0).abs() < 1e-5);
	assert_eq!(document["rotation"]["w"], 0.5);
	assert_eq!(document["statistics"]["samples"], 66);
}

#[test]
fn parse_errors() {
	assert!(Command::try_parse_from(["sphere-viz", "slice", "--colors", "#12"]).is_err());
	assert!(Command::try_parse_from(["sphere-viz", "slice", "--resolution", "12"]).is_err());
	assert!(Command::try_parse_from(["sphere-viz", "quat", "1", "2", "3"]).is_err());
	assert!(Command::try_parse_from(["sphere-viz", "quat"]).is_err());
	assert!(Command::try_parse_from(["sphere-viz", "quat", "--seed", "3"]).is_err());
}

#[test]
fn quat_accepts_negative_values() {
	let command = Command::try_parse_from([
		"sphere-viz", "quat", "1", "-2", "3", "-4", "0.5", "0.5", "0.5", "0.5",
	])
	.unwrap();
	command.run().unwrap();
	Command::try_parse_from(["sphere-viz", "quat", "--random", "--seed", "9", "--normalize"])
		.unwrap()
		.run()
		.unwrap();
}

#[test]
fn invalid_settings_are_errors() {
	let command = Command::try_parse_from(["sphere-viz", "slice", "--radius", "0", "--resolution", "4x4"]).unwrap();
	assert_eq!(
		command.run().unwrap_err().to_string(),
		"Radius must be positive, got 0"
	);
}

#[test]
fn overlong_sweep_is_an_error() {
	let command = Command::try_parse_from(["sphere-viz", "slice", "--resolution", "4x4", "--duration", "1e300"]).unwrap();
	assert!(matches!(
		command.run(),
		Err(Error::CrossSection(cross_section::Error::TooManyFrames(duration))) if duration == 1e300
	));
	let command = Command::try_parse_from(["sphere-viz", "hypersphere", "--resolution", "4x4", "--duration", "inf"]).unwrap();
	assert_eq!(
		command.run().unwrap_err().to_string(),
		"Duration must be finite and not negative, got inf"
	);
}

#[test]
fn precision_above_limit_is_an_error() {
	let command = Command::try_parse_from(["sphere-viz", "slice", "--resolution", "4x4", "--precision", "16"]).unwrap();
	assert_eq!(
		command.run().unwrap_err().to_string(),
		"Precision 16 is too high, atmost 15 decimal digits are supported"
	);
}

#[test]
fn hypersphere_axis_rotation() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("hypersphere.json");
	let document = run(
		&["hypersphere", "--resolution", "11x6", "--fps", "1", "--axis", "0", "0", "-1", "--angle", "180"],
		&path,
	);
	let rotation = &document["rotation"];
	assert!(rotation["w"].as_f64().unwrap().abs() < 1e-6);
	assert!((rotation["z"].as_f64().unwrap() + 1.0).abs() < 1e-6);
	assert!((document["frames"][2]["extent"].as_f64().unwrap() - 2.0).abs() < 1e-5);

	assert!(Command::try_parse_from(["sphere-viz", "hypersphere", "--axis", "0", "0", "1"]).is_err());
	assert!(Command::try_parse_from(["sphere-viz", "hypersphere", "--angle", "45"]).is_err());
	assert!(Command::try_parse_from([
		"sphere-viz", "hypersphere", "--rotate", "--axis", "1", "0", "0", "--angle", "45",
	])
	.is_err());
	let command = Command::try_parse_from([
		"sphere-viz", "hypersphere", "--resolution", "4x4", "--axis", "0", "0", "0", "--angle", "45",
	])
	.unwrap();
	assert!(command.run().is_err());
}
