//! # RCC Section Calculator CLI
//!
//! Console front end for the rcc_core engine. Each mode takes a fixed-arity
//! list of numeric arguments; on any arity or parse problem it prints the
//! mode's syntax and performs no calculation, so the engine only ever sees
//! already-parsed floating-point values.
//!
//! Append `--json` to any mode to also dump the result record as JSON.

use std::env;

use rcc_core::calculations::cracking_torsion::{self, CrackingTorsionInput};
use rcc_core::calculations::flexure_analysis::{self, FlexureAnalysisInput};
use rcc_core::calculations::flexure_design::{self, FlexureDesignInput};
use rcc_core::calculations::shear_design::{self, ShearDesignInput, ShearRequirement};
use rcc_core::calculations::stirrup_spacing::{self, StirrupSpacingInput};
use rcc_core::calculations::torsion_design::{self, TorsionDesignInput};
use rcc_core::errors::CalcError;
use rcc_core::geometry::SectionAssumptions;
use rcc_core::materials::MaterialProperties;

mod report;

const USAGE: &str = "rcc <mode> <args...> [--json]
    modes:
    arec  b d f'c fy As          analysis of a singly reinforced section
    drec  b d f'c fy Mu          flexural design (Mu in kip-ft)
    drec2 b d f'c fy Vu phi      shear design (Vu in kip)
    drec3 b h f'c fy Vu Tu phi   shear + torsion design (Tu in kip-inch)
    tcr   b h f'c                cracking torsion
    stsp  Av/s At/s Ast As       stirrup spacing";

fn main() {
    let mut args: Vec<String> = env::args().skip(1).collect();

    let json = if let Some(pos) = args.iter().position(|a| a == "--json") {
        args.remove(pos);
        true
    } else {
        false
    };

    let Some(mode) = args.first().cloned() else {
        println!("{}", USAGE);
        return;
    };
    let rest = &args[1..];

    match mode.as_str() {
        "arec" => run_arec(rest, json),
        "drec" => run_drec(rest, json),
        "drec2" => run_drec2(rest, json),
        "drec3" => run_drec3(rest, json),
        "tcr" => run_tcr(rest, json),
        "stsp" => run_stsp(rest, json),
        _ => {
            println!("Unknown mode '{}'", mode);
            println!("{}", USAGE);
        }
    }
}

/// Parse exactly `n` numeric arguments; on any mismatch print the mode's
/// syntax and return None (no calculation is performed).
fn parse_numeric(args: &[String], n: usize, syntax: &str) -> Option<Vec<f64>> {
    if args.len() != n {
        println!("Syntax Error, use following syntax:");
        println!("{}", syntax);
        return None;
    }

    let mut values = Vec::with_capacity(n);
    for arg in args {
        match arg.parse::<f64>() {
            Ok(v) => values.push(v),
            Err(_) => {
                println!("Syntax Error, use following syntax:");
                println!("{}", syntax);
                return None;
            }
        }
    }
    Some(values)
}

fn print_error(e: &CalcError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(&e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn print_json<T: serde::Serialize>(result: &T) {
    report::blank();
    if let Ok(json) = serde_json::to_string_pretty(result) {
        println!("{}", json);
    }
}

// ============================================================================
// arec - flexural analysis
// ============================================================================

fn run_arec(args: &[String], json: bool) {
    let syntax = "rcc arec b d f'c fy As
    where:
    b   = width of beam (inch)
    d   = effective depth of beam (inch)
    f'c = cylinderical compressive strength of concrete (psi)
    fy  = yield strength of reinforcing steel (psi)
    As  = area of reinforcement (sq.inch)";

    report::title("AREC: ANALYSIS OF SINGLY REINFORCED RECTANGULAR CONCRETE SECTIONS");

    let Some(v) = parse_numeric(args, 5, syntax) else {
        return;
    };

    let input = FlexureAnalysisInput {
        label: "arec".to_string(),
        width_in: v[0],
        eff_depth_in: v[1],
        material: MaterialProperties::new(v[2], v[3]),
        steel_area_in2: v[4],
    };

    report::section("INPUTS");
    report::value("Width of beam, b", input.width_in, "inch");
    report::value("Effective depth of beam, d", input.eff_depth_in, "inch");
    report::value("Specified Strength of Concrete, f'c", input.material.fc_psi, "psi");
    report::value("Yield Strength of reinforcement, fy", input.material.fy_psi, "psi");
    report::value("Area of reinforcement, As", input.steel_area_in2, "sq.inch");
    report::blank();

    let result = match flexure_analysis::calculate(&input) {
        Ok(r) => r,
        Err(e) => {
            print_error(&e);
            return;
        }
    };

    report::section("OUTPUTS");
    report::value("beta1", result.limits.beta1, "");
    report::blank();

    println!(
        "Provided reinforcement percentage, rho = {:.2} %",
        result.rho * 100.0
    );
    report::ratio_with_area(
        "Minimum reinforcement, rho-minimum",
        result.limits.rho_min,
        result.as_min_in2,
    );
    report::ratio_with_area(
        "Balanced reinforcement, rho-balance",
        result.limits.rho_balanced,
        result.as_balanced_in2,
    );
    report::ratio_with_area(
        "Maximum reinforcement, rho-max",
        result.limits.rho_max,
        result.as_max_in2,
    );
    report::blank();

    report::verdicts(&result.verdicts);

    if result.is_adequate() {
        report::value_fixed(
            "Depth of Whitney block, a",
            result.block_depth_in.unwrap_or_default(),
            2,
            "inch",
        );
        report::value_fixed(
            "Depth of neutral axis, c",
            result.neutral_axis_in.unwrap_or_default(),
            2,
            "inch",
        );
        report::blank();

        report::value_fixed(
            "Net Tensile Strain, epsilon_t",
            result.net_tensile_strain.unwrap_or_default(),
            5,
            "",
        );
        report::value_fixed(
            "Strengh reduction factor, phi_flexure",
            result.phi.unwrap_or_default(),
            2,
            "",
        );
        report::blank();

        report::value_fixed(
            "Nominal Moment Capacity, Mn",
            result.nominal_moment_inlb.unwrap_or_default() / 12000.0,
            1,
            "kip-ft",
        );
        report::value_fixed(
            "Design Moment Capacity, Mu = phi * Mn",
            result.design_moment_inlb.unwrap_or_default() / 12000.0,
            1,
            "kip-ft",
        );
    }

    if json {
        print_json(&result);
    }
}

// ============================================================================
// drec - flexural design
// ============================================================================

fn run_drec(args: &[String], json: bool) {
    let syntax = "rcc drec b d f'c fy Mu
    where:
    b   = width of rectangular section (inch)
    d   = effective depth of rectangular section (inch)
    f'c = cylinderical compressive strength of concrete (psi)
    fy  = yield strength of reinforcing steel (psi)
    Mu  = design bending moment (kip-ft)";

    report::title("DREC: FLEXURAL DESIGN OF SINGLY REINFORCED RECTANGULAR RCC SECTIONS");

    let Some(v) = parse_numeric(args, 5, syntax) else {
        return;
    };

    let input = FlexureDesignInput {
        label: "drec".to_string(),
        width_in: v[0],
        eff_depth_in: v[1],
        material: MaterialProperties::new(v[2], v[3]),
        moment_kipft: v[4],
    };

    report::section("INPUTS");
    report::value("Width of beam, b", input.width_in, "inch");
    report::value("Effective depth of beam, d", input.eff_depth_in, "inch");
    report::value("Specified Strength of Concrete, f'c", input.material.fc_psi, "psi");
    report::value("Yield Strength of reinforcement, fy", input.material.fy_psi, "psi");
    report::value("Design Bending Moment, Mu", input.moment_kipft, "kip-ft");
    report::blank();

    let result = match flexure_design::calculate(&input) {
        Ok(r) => r,
        Err(e) => {
            print_error(&e);
            return;
        }
    };

    report::section("OUTPUTS");
    report::value("beta1", result.limits.beta1, "");
    println!(
        "Strength reduction factor, phi_flexure = {} (rho will be limited to rho_max)",
        flexure_design::PHI_DESIGN
    );
    report::blank();

    if let (Some(rho_calc), Some(as_calc)) = (result.rho_calc, result.as_calc_in2) {
        println!(
            "Calculated reinforcement, As-calc = {:.2} sq.inch (rho-calc = {:.2}%)",
            as_calc,
            rho_calc * 100.0
        );
    }
    println!(
        "Minimum reinforcement, As-min = {:.2} sq.inch (rho-min = {:.2}%)",
        result.as_min_in2,
        result.limits.rho_min * 100.0
    );
    println!(
        "Balanced reinforcement, As-bal = {:.2} sq.inch (rho-balance = {:.2}%)",
        result.as_balanced_in2,
        result.limits.rho_balanced * 100.0
    );
    println!(
        "Maximum reinforcement, As-max = {:.2} sq.inch (rho-max = {:.2}%)",
        result.as_max_in2,
        result.limits.rho_max * 100.0
    );
    report::blank();

    report::verdicts(&result.verdicts);

    if let (Some(rho), Some(as_provided)) = (result.rho_provided, result.as_provided_in2) {
        println!(
            "Reinforcement to be provided, As = {:.2} sq.inch (rho = {:.2}%)",
            as_provided,
            rho * 100.0
        );
    }

    if json {
        print_json(&result);
    }
}

// ============================================================================
// drec2 - shear design
// ============================================================================

fn print_shear_outputs(shear: &rcc_core::calculations::ShearOutcome, phi: f64) {
    report::value_fixed("Shear capacity of provided section, Vc", shear.vc_lb / 1000.0, 2, "kip");
    report::value_fixed("phi*Vc", phi * shear.vc_lb / 1000.0, 2, "kip");
    report::blank();

    report::verdicts(&shear.verdicts);

    if let Some(vs) = shear.vs_lb {
        report::value_fixed("Vs = (Vu - phi*Vc)/phi", vs / 1000.0, 2, "kip");
        report::blank();
    }

    if let Some(av_over_s) = shear.av_over_s {
        let label = match shear.requirement {
            ShearRequirement::Minimum => "Minimum Shear Reinforcement required, Av/S",
            _ => "Shear Reinforcement required, Av/S",
        };
        report::value_fixed(label, av_over_s, 6, "sq.inch / inch");
    }
}

fn run_drec2(args: &[String], json: bool) {
    let syntax = "rcc drec2 b d f'c fy Vu phi
    where:
    b   = width of rectangular section (inch)
    d   = effective depth of rectangular section (inch)
    f'c = cylinderical compressive strength of concrete (psi)
    fy  = yield strength of reinforcing steel (psi)
    Vu  = Factored shear force (kip)
    phi = Strength reduction factor for shear and torsion";

    report::title("DREC2: DESIGN OF RECTANGULAR RCC SECTIONS FOR SHEAR");

    let Some(v) = parse_numeric(args, 6, syntax) else {
        return;
    };

    let input = ShearDesignInput {
        label: "drec2".to_string(),
        width_in: v[0],
        eff_depth_in: v[1],
        material: MaterialProperties::new(v[2], v[3]),
        shear_kip: v[4],
        phi: v[5],
    };

    report::section("INPUTS");
    report::value("Width of rectangular section, b", input.width_in, "inch");
    report::value("Effective depth of rectangular section, d", input.eff_depth_in, "inch");
    report::value("Specified Strength of Concrete, f'c", input.material.fc_psi, "psi");
    report::value("Yield Strength of reinforcement, fy", input.material.fy_psi, "psi");
    report::value("Design Shear Force, Vu", input.shear_kip, "kip");
    report::value("Strength reduction factor, phi_shear", input.phi, "");
    report::blank();

    let result = match shear_design::calculate(&input) {
        Ok(r) => r,
        Err(e) => {
            print_error(&e);
            return;
        }
    };

    report::section("OUTPUTS");
    print_shear_outputs(&result.shear, input.phi);

    if json {
        print_json(&result);
    }
}

// ============================================================================
// drec3 - combined shear + torsion design
// ============================================================================

fn run_drec3(args: &[String], json: bool) {
    let syntax = "rcc drec3 b h f'c fy Vu Tu phi
    where:
    b   = width of web of beam (inch)
    h   = overall depth of beam (inch)
    f'c = cylinderical compressive strength of concrete (psi)
    fy  = yield strength of reinforcing steel (psi)
    Vu  = factored shear force (kip)
    Tu  = factored torsion (kip-inch)
    phi = strength reduction factor for shear and torsion";

    report::title("DREC3: DESIGN OF RECTANGULAR RCC SECTION FOR SHEAR AND TORSION");

    let Some(v) = parse_numeric(args, 7, syntax) else {
        return;
    };

    let input = TorsionDesignInput {
        label: "drec3".to_string(),
        width_in: v[0],
        overall_depth_in: v[1],
        material: MaterialProperties::new(v[2], v[3]),
        shear_kip: v[4],
        torsion_kipin: v[5],
        phi: v[6],
        assumptions: SectionAssumptions::default(),
    };

    report::section("INPUTS");
    report::value("Width of (web of) beam, b", input.width_in, "inch");
    report::value("Overall depth of beam, h", input.overall_depth_in, "inch");
    report::value("Specified Strength of Concrete, f'c", input.material.fc_psi, "psi");
    report::value("Yield Strength of reinforcement, fy", input.material.fy_psi, "psi");
    report::value("Design Shear Force, Vu", input.shear_kip, "kip");
    report::value("Design Torsion Moment, Tu", input.torsion_kipin, "kip-inch");
    report::value("Strength reduction factor, phi_shear", input.phi, "");
    report::blank();

    let result = match torsion_design::calculate(&input) {
        Ok(r) => r,
        Err(e) => {
            print_error(&e);
            return;
        }
    };

    report::section("ASSUMPTIONS");
    report::value("Clear cover", result.assumptions.clear_cover_in, "inch");
    println!(
        "Stirrup bar = {} ({} inch diameter)",
        result.assumptions.stirrup_bar,
        result.assumptions.stirrup_bar.diameter_in()
    );
    println!(
        "Main bar = {} ({} inch diameter)",
        result.assumptions.main_bar,
        result.assumptions.main_bar.diameter_in()
    );
    report::value("Effective Depth, d", result.eff_depth_in, "inch");
    report::blank();

    report::section("SHEAR DESIGN");
    print_shear_outputs(&result.shear, input.phi);
    report::blank();

    report::section("TORSION DESIGN");
    println!("Section Parameters:");
    println!(
        "x1 = {} inch, y1 = {} inch",
        result.geometry.x1_in, result.geometry.y1_in
    );
    println!(
        "Acp = {} sq.inch, Pcp = {} inch",
        result.geometry.acp_in2, result.geometry.pcp_in
    );
    println!(
        "A0h = {} sq.inch, A0 = {} sq.inch, Ph = {} inch",
        result.geometry.a0h_in2, result.geometry.a0_in2, result.geometry.ph_in
    );
    report::blank();

    report::value_fixed("Tcr", result.tcr_inlb / 1000.0, 2, "kip-inch");
    report::value_fixed("phi * Tcr", result.phi_tcr_inlb / 1000.0, 2, "kip-inch");
    report::blank();

    if let (Some(lhs), Some(rhs)) = (result.combined_stress_lhs_psi, result.combined_stress_rhs_psi)
    {
        report::value_fixed("Left hand side of shear + torsion check", lhs, 2, "psi");
        report::value_fixed("Right hand side of shear + torsion check", rhs, 2, "psi");
    }

    report::verdicts(&result.verdicts);

    if let (Some(at_over_s), Some(al)) = (result.at_over_s, result.al_in2) {
        println!("Section is adequate for design Vu and Tu");
        report::blank();
        report::value_fixed("At/s", at_over_s, 6, "sq.inch / inch");
        report::value_fixed("Al", al, 2, "sq.inch");
    }

    if json {
        print_json(&result);
    }
}

// ============================================================================
// tcr - cracking torsion
// ============================================================================

fn run_tcr(args: &[String], json: bool) {
    let syntax = "rcc tcr b h f'c
    where:
    b   = width of beam (inch)
    h   = overall depth of beam (inch)
    f'c = cylinderical compressive strength of concrete (psi)";

    report::title("TCR: CRACKING TORSION FOR RECTANGULAR SOLID RCC SECTION");

    let Some(v) = parse_numeric(args, 3, syntax) else {
        return;
    };

    let input = CrackingTorsionInput {
        label: "tcr".to_string(),
        width_in: v[0],
        overall_depth_in: v[1],
        fc_psi: v[2],
    };

    report::section("INPUTS");
    report::value("Width of beam, b", input.width_in, "inch");
    report::value("Total depth of beam, h", input.overall_depth_in, "inch");
    report::value("Specified Strength of Concrete, f'c", input.fc_psi, "psi");
    report::blank();

    let result = match cracking_torsion::calculate(&input) {
        Ok(r) => r,
        Err(e) => {
            print_error(&e);
            return;
        }
    };

    report::section("OUTPUTS");
    report::value_fixed("Tcr", result.tcr_inlb / 1000.0, 2, "kip-inch");
    report::value_fixed("0.85*Tcr", result.tcr_085_inlb / 1000.0, 2, "kip-inch");
    report::value_fixed("0.75*Tcr", result.tcr_075_inlb / 1000.0, 2, "kip-inch");

    if json {
        print_json(&result);
    }
}

// ============================================================================
// stsp - stirrup spacing
// ============================================================================

fn run_stsp(args: &[String], json: bool) {
    let syntax = "rcc stsp Av/s At/s Ast As
    where:
    Av/s = Required shear reinforcement (sq.inch /inch)
    At/s = Required torsion reinforcement (sq.inch /inch)
    Ast  = Area of single leg of outer closed hoop (sq.inch)
    As   = Area (Sum) of all remaining vertical shear reinforcement legs (sq.inch)";

    report::title("STSP: STIRRUP SPACING CALCULATOR");

    let Some(v) = parse_numeric(args, 4, syntax) else {
        return;
    };

    let input = StirrupSpacingInput {
        label: "stsp".to_string(),
        av_over_s: v[0],
        at_over_s: v[1],
        hoop_leg_area_in2: v[2],
        extra_leg_area_in2: v[3],
    };

    report::section("INPUTS");
    report::value("Required shear reinforcement, Av/s", input.av_over_s, "sq.inch /inch");
    report::value("Required torsion reinforcement, At/s", input.at_over_s, "sq.inch /inch");
    report::value(
        "Area of single leg of outer closed hoop, Ast",
        input.hoop_leg_area_in2,
        "sq.inch",
    );
    report::value(
        "Area (Sum) of all remaining vertical shear reinforcement legs, As",
        input.extra_leg_area_in2,
        "sq.inch",
    );
    report::blank();

    let result = match stirrup_spacing::calculate(&input) {
        Ok(r) => r,
        Err(e) => {
            print_error(&e);
            return;
        }
    };

    report::section("OUTPUTS");
    report::value_fixed("total shear reinf area", result.total_shear_area_in2, 6, "sq.inch");
    report::value_fixed(
        "scaled shear reinforcement",
        result.scaled_av_over_s,
        6,
        "sq.inch/inch",
    );
    report::value_fixed("Total (Av + At)/s", result.total_intensity, 6, "sq.inch/inch");
    report::blank();
    report::value_fixed("Required spacing, S", result.spacing_in, 2, "inch");

    if json {
        print_json(&result);
    }
}
