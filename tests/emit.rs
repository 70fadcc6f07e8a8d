// SPDX-License-Identifier: Apache-2.0

use autostitch::*;

#[test]
fn test_emit_basic() {
    let mut a = ModInst::new("a_i").with_module("A");
    a.add_port("clk", IO::Input(1))
        .add_port("wdata", IO::Output(8))
        .add_port("wready", IO::Input(1));

    let mut b = ModInst::new("b_i").with_module("B");
    b.add_port("clk", IO::Input(1))
        .add_port("wdata", IO::Input(8))
        .add_port("wready", IO::Output(1))
        .add_port("irq", IO::Output(4));

    let instances = vec![a, b];
    let connectivity = analyze(&instances, &AnalysisConfig::with_default_externals()).unwrap();

    assert_eq!(
        emit("C", &instances, &connectivity).unwrap(),
        "\
module C(
  input wire clk
);
  wire [7:0] wdata;
  wire wready;
  wire [3:0] b_i__irq;
  A a_i (
    .clk(clk),
    .wdata(wdata),
    .wready(wready)
  );
  B b_i (
    .clk(clk),
    .wdata(wdata),
    .wready(wready),
    .irq(b_i__irq)
  );
endmodule
"
    );
}

#[test]
fn test_emit_without_externals() {
    let mut producer = ModInst::new("producer");
    producer.add_port("data", IO::Output(16));
    let mut consumer = ModInst::new("consumer");
    consumer.add_port("data", IO::Input(16));

    let design = Design {
        top: "Top".to_string(),
        instances: vec![producer, consumer],
    };

    assert_eq!(
        design.emit(&AnalysisConfig::default()).unwrap(),
        "\
module Top;
  wire [15:0] data;
  producer producer (
    .data(data)
  );
  consumer consumer (
    .data(data)
  );
endmodule
"
    );
}

#[test]
fn test_emit_multiple_external_inputs() {
    let mut a = ModInst::new("a");
    a.add_port("clk", IO::Input(1))
        .add_port("rst_n", IO::Input(1))
        .add_port("cfg", IO::Input(4));
    let mut b = ModInst::new("b");
    b.add_port("cfg", IO::Input(4))
        .add_port("clk", IO::Input(1))
        .add_port("rst_n", IO::Input(1));

    let config = AnalysisConfig::with_default_externals().with_external("cfg");
    let design = Design {
        top: "Top".to_string(),
        instances: vec![a, b],
    };

    assert_eq!(
        design.emit(&config).unwrap(),
        "\
module Top(
  input wire clk,
  input wire rst_n,
  input wire [3:0] cfg
);
  a a (
    .clk(clk),
    .rst_n(rst_n),
    .cfg(cfg)
  );
  b b (
    .cfg(cfg),
    .clk(clk),
    .rst_n(rst_n)
  );
endmodule
"
    );
}

#[test]
fn test_emit_reports_analysis_errors() {
    let mut a = ModInst::new("a");
    a.add_port("en", IO::Input(1));
    let mut b = ModInst::new("b");
    b.add_port("en", IO::Input(1));

    let design = Design {
        top: "Top".to_string(),
        instances: vec![a, b],
    };

    let err = design
        .emit(&AnalysisConfig::with_default_externals())
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Connectivity(ConnectivityError::MissingDriver { ref signal }) if signal == "en"
    ));
    assert_eq!(err.to_string(), "No driver found for shared signal 'en'");
}

#[test]
fn test_emit_to_file() {
    let mut a = ModInst::new("a");
    a.add_port("x", IO::Output(2));

    let design = Design {
        top: "Top".to_string(),
        instances: vec![a],
    };

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("output").join("top_generated.sv");
    design
        .emit_to_file(&path, &AnalysisConfig::default())
        .unwrap();

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "\
module Top;
  wire [1:0] a__x;
  a a (
    .x(a__x)
  );
endmodule
"
    );
}

#[test]
fn test_emit_instance_named_like_shared_net() {
    let mut producer = ModInst::new("data").with_module("producer");
    producer.add_port("data", IO::Output(8));
    let mut consumer = ModInst::new("c").with_module("consumer");
    consumer.add_port("data", IO::Input(8));

    let design = Design {
        top: "Top".to_string(),
        instances: vec![producer, consumer],
    };

    let err = design.emit(&AnalysisConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::Emit(EmitError::NameCollision { ref name, .. }) if name == "data"
    ));
    assert_eq!(
        err.to_string(),
        "Name \"data\" is already declared in module Top"
    );
}

#[test]
fn test_emit_instance_named_like_isolated_net() {
    let mut a = ModInst::new("a");
    a.add_port("x", IO::Output(1));
    let b = ModInst::new("a__x");

    let instances = vec![a, b];
    let connectivity = analyze(&instances, &AnalysisConfig::default()).unwrap();

    assert_eq!(
        emit("Top", &instances, &connectivity).unwrap_err(),
        EmitError::NameCollision {
            name: "a__x".to_string(),
            module: "Top".to_string(),
        }
    );
}

#[test]
fn test_emit_instance_named_like_external_input() {
    let mut a = ModInst::new("clk");
    a.add_port("clk", IO::Input(1));
    let mut b = ModInst::new("b");
    b.add_port("clk", IO::Input(1));

    let instances = vec![a, b];
    let connectivity = analyze(&instances, &AnalysisConfig::with_default_externals()).unwrap();

    assert!(matches!(
        emit("Top", &instances, &connectivity),
        Err(EmitError::NameCollision { name, .. }) if name == "clk"
    ));
}
