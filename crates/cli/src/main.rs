use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use nalgebra::Vector2;
use polykern::geom2::{IndexTriple, Polygon2};
use polykern::hull::{convex_hull, HullAlgo};
use polykern::intersect::{intersection_area, ConvexClip};
use polykern::triangulate::EarClipping;
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser)]
#[command(name = "polykern-cli")]
#[command(about = "Convex hulls, ear-clipping triangulation and convex intersection")]
struct Cmd {
    /// Optional run label; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Convex hull of a point cloud
    Hull {
        #[arg(long, default_value_t = HullAlgo::default())]
        algo: HullAlgo,
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Ear-clipping triangulation of a simple polygon
    Triangulate {
        #[arg(long)]
        input: PathBuf,
        /// Skip orientation detection: input is counter-clockwise
        #[arg(long, conflicts_with = "cw")]
        ccw: bool,
        /// Skip orientation detection: input is clockwise
        #[arg(long)]
        cw: bool,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Intersection polygon and signed intersection area of two convex polygons
    Intersect {
        #[arg(long)]
        a: PathBuf,
        #[arg(long)]
        b: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let tag = cmd.tag;
    match cmd.action {
        Action::Hull { algo, input, out } => hull(algo, &input, out.as_deref(), tag),
        Action::Triangulate { input, ccw, cw, out } => {
            let known = if ccw {
                Some(true)
            } else if cw {
                Some(false)
            } else {
                None
            };
            triangulate(&input, known, out.as_deref(), tag)
        }
        Action::Intersect { a, b, out } => intersect(&a, &b, out.as_deref(), tag),
        Action::Report => report(tag),
    }
}

#[derive(Serialize)]
struct HullDoc {
    algo: String,
    input_points: usize,
    hull: Vec<[f64; 2]>,
}

#[derive(Serialize)]
struct TriangulateDoc {
    vertices: usize,
    ccw: bool,
    triangles: Vec<[usize; 3]>,
}

#[derive(Serialize)]
struct IntersectDoc {
    /// `None` when the boundaries do not cross (disjoint or nested).
    clip: Option<Vec<[f64; 2]>>,
    area: f64,
}

fn read_points(path: &Path) -> Result<Vec<Vector2<f64>>> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let raw: Vec<[f64; 2]> = serde_json::from_slice(&bytes)
        .with_context(|| format!("{}: expected a JSON array of [x, y] pairs", path.display()))?;
    Ok(raw.into_iter().map(|[x, y]| Vector2::new(x, y)).collect())
}

fn read_polygon(path: &Path) -> Result<Polygon2> {
    let poly = Polygon2::from(read_points(path)?);
    if poly.len() < 3 {
        bail!("{}: polygon needs at least 3 vertices, got {}", path.display(), poly.len());
    }
    Ok(poly)
}

fn to_pairs(p: &Polygon2) -> Vec<[f64; 2]> {
    p.vertices.iter().map(|v| [v.x, v.y]).collect()
}

fn hull_doc(algo: HullAlgo, points: &[Vector2<f64>]) -> HullDoc {
    let hull = convex_hull(points, algo);
    HullDoc {
        algo: algo.to_string(),
        input_points: points.len(),
        hull: to_pairs(&hull),
    }
}

fn triangulate_doc(poly: &Polygon2, known_ccw: Option<bool>) -> TriangulateDoc {
    let mut tri = EarClipping::default();
    tri.set_known_order(known_ccw);
    let mut out: Vec<IndexTriple> = Vec::new();
    tri.process(poly, &mut out);
    TriangulateDoc {
        vertices: poly.len(),
        ccw: known_ccw.unwrap_or_else(|| poly.is_ccw()),
        triangles: out.iter().map(IndexTriple::as_array).collect(),
    }
}

fn intersect_doc(a: &Polygon2, b: &Polygon2) -> IntersectDoc {
    let mut clip = Polygon2::new();
    let crossed = ConvexClip::default().process(a, b, &mut clip);
    IntersectDoc {
        clip: crossed.then(|| to_pairs(&clip)),
        area: intersection_area(a, b),
    }
}

fn hull(algo: HullAlgo, input: &Path, out: Option<&Path>, tag: Option<String>) -> Result<()> {
    let points = read_points(input)?;
    let doc = hull_doc(algo, &points);
    tracing::info!(
        %algo,
        input = %input.display(),
        points = doc.input_points,
        hull = doc.hull.len(),
        tag = ?tag,
        "hull"
    );
    let params = json!({
        "cmd": "hull",
        "algo": algo.name(),
        "input": input.display().to_string(),
    });
    emit(&doc, out, params, tag)
}

fn triangulate(
    input: &Path,
    known_ccw: Option<bool>,
    out: Option<&Path>,
    tag: Option<String>,
) -> Result<()> {
    let poly = read_polygon(input)?;
    let doc = triangulate_doc(&poly, known_ccw);
    tracing::info!(
        input = %input.display(),
        vertices = doc.vertices,
        triangles = doc.triangles.len(),
        ccw = doc.ccw,
        tag = ?tag,
        "triangulate"
    );
    if doc.triangles.len() + 2 != doc.vertices {
        tracing::warn!(
            expected = doc.vertices - 2,
            got = doc.triangles.len(),
            "ear search stalled; input is probably not simple"
        );
    }
    let params = json!({
        "cmd": "triangulate",
        "input": input.display().to_string(),
        "known_ccw": known_ccw,
    });
    emit(&doc, out, params, tag)
}

fn intersect(a: &Path, b: &Path, out: Option<&Path>, tag: Option<String>) -> Result<()> {
    let pa = read_polygon(a)?;
    let pb = read_polygon(b)?;
    let doc = intersect_doc(&pa, &pb);
    if doc.clip.is_none() {
        tracing::warn!(
            a = %a.display(),
            b = %b.display(),
            "clip walk found no crossing; polygons are disjoint or nested"
        );
    }
    tracing::info!(
        a = %a.display(),
        b = %b.display(),
        clip = doc.clip.as_ref().map_or(0, Vec::len),
        area = doc.area,
        tag = ?tag,
        "intersect"
    );
    let params = json!({
        "cmd": "intersect",
        "a": a.display().to_string(),
        "b": b.display().to_string(),
    });
    emit(&doc, out, params, tag)
}

/// Print `doc` to stdout, or write it to `out` plus a provenance sidecar.
fn emit<T: Serialize>(
    doc: &T,
    out: Option<&Path>,
    params: serde_json::Value,
    tag: Option<String>,
) -> Result<()> {
    let Some(out_path) = out else {
        println!("{}", serde_json::to_string_pretty(doc)?);
        return Ok(());
    };
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out_path, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", out_path.display()))?;
    let sidecar = provenance::write_sidecar(out_path, provenance::Payload::new(params, tag))?;
    tracing::info!(out = %out_path.display(), provenance = %sidecar.display(), "wrote");
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let algos: Vec<&str> = HullAlgo::ALL.iter().map(HullAlgo::name).collect();
    let obj = provenance::block(tag.as_deref(), json!({ "hull_algos": algos }), &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::fs;
    use tempfile::tempdir;

    fn write_json(dir: &Path, name: &str, v: Value) -> PathBuf {
        let p = dir.join(name);
        fs::write(&p, serde_json::to_vec(&v).unwrap()).unwrap();
        p
    }

    #[test]
    fn cli_parses_subcommands() {
        let cmd = Cmd::try_parse_from([
            "polykern-cli", "--tag", "t1", "hull", "--algo", "graham-collinear", "--input", "p.json",
        ])
        .unwrap();
        assert_eq!(cmd.tag.as_deref(), Some("t1"));
        match cmd.action {
            Action::Hull { algo, out, .. } => {
                assert_eq!(algo, HullAlgo::GrahamScanCollinear);
                assert!(out.is_none());
            }
            _ => panic!("expected hull"),
        }

        let cmd = Cmd::try_parse_from(["polykern-cli", "hull", "--input", "p.json"]).unwrap();
        assert!(matches!(cmd.action, Action::Hull { algo: HullAlgo::AndrewMonotone, .. }));

        assert!(Cmd::try_parse_from(["polykern-cli", "hull", "--algo", "jarvis", "--input", "p"]).is_err());
        assert!(Cmd::try_parse_from([
            "polykern-cli", "triangulate", "--input", "p", "--ccw", "--cw"
        ])
        .is_err());
    }

    #[test]
    fn hull_doc_drops_interior_points() {
        let pts = vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(2.0, 0.0),
            Vector2::new(1.0, 1.0),
            Vector2::new(2.0, 2.0),
            Vector2::new(0.0, 2.0),
        ];
        for algo in HullAlgo::ALL {
            let doc = hull_doc(algo, &pts);
            assert_eq!(doc.input_points, 5);
            assert_eq!(doc.hull.len(), 4, "{algo}");
            assert!(!doc.hull.contains(&[1.0, 1.0]));
        }
    }

    #[test]
    fn triangulate_doc_reports_square() {
        let sq = Polygon2::from_xy(&[0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0]);
        let doc = triangulate_doc(&sq, None);
        assert!(doc.ccw);
        assert_eq!(doc.triangles, vec![[3, 0, 1], [1, 2, 3]]);
        let pinned = triangulate_doc(&sq, Some(true));
        assert_eq!(pinned.triangles, doc.triangles);
    }

    #[test]
    fn intersect_doc_nested_has_area_but_no_clip() {
        let outer = Polygon2::from_xy(&[0.0, 0.0, 4.0, 0.0, 4.0, 4.0, 0.0, 4.0]);
        let inner = Polygon2::from_xy(&[1.0, 1.0, 2.0, 1.0, 2.0, 2.0, 1.0, 2.0]);
        let doc = intersect_doc(&outer, &inner);
        assert!(doc.clip.is_none());
        assert!((doc.area - 1.0).abs() < 1e-5);
    }

    #[test]
    fn intersect_writes_output_and_sidecar() {
        let dir = tempdir().unwrap();
        let a = write_json(dir.path(), "a.json", json!([[0, 0], [2, 0], [2, 2], [0, 2]]));
        let b = write_json(dir.path(), "b.json", json!([[1, 1], [3, 1], [3, 3], [1, 3]]));
        let out = dir.path().join("nested/dir/ab.json");
        intersect(&a, &b, Some(&out), Some("x".into())).unwrap();

        let doc: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert!((doc["area"].as_f64().unwrap() - 1.0).abs() < 1e-5);
        assert_eq!(doc["clip"].as_array().unwrap().len(), 4);

        let side: Value =
            serde_json::from_slice(&fs::read(dir.path().join("nested/dir/ab.provenance.json")).unwrap())
                .unwrap();
        assert_eq!(side["params"]["cmd"], "intersect");
        assert_eq!(side["tag"], "x");
    }

    #[test]
    fn malformed_inputs_are_errors() {
        let dir = tempdir().unwrap();
        let odd = write_json(dir.path(), "odd.json", json!([[0, 0], [1]]));
        assert!(read_points(&odd).is_err());
        let short = write_json(dir.path(), "short.json", json!([[0, 0], [1, 0]]));
        let err = read_polygon(&short).unwrap_err();
        assert!(err.to_string().contains("at least 3"));
        assert!(read_points(&dir.path().join("missing.json")).is_err());
    }
}
