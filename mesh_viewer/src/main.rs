//! Headless mesh viewer
//!
//! Loads an OBJ mesh through the asset search paths, attaches it to a scene
//! together with a couple of scripts, and runs the fixed-step frame loop
//! against a [`PolygonRecorder`] instead of a real rasterizer.
//!
//! ```text
//! mesh_viewer [MESH] [--config FILE]
//! ```

use raster_engine::foundation::logging;
use raster_engine::prelude::*;

use thiserror::Error;

const DEFAULT_CONFIG: &str = "mesh_viewer.toml";
const DEFAULT_MESH: &str = "pyramid.obj";

#[derive(Error, Debug)]
enum ArgsError {
    #[error("--config needs a file argument")]
    MissingConfigPath,
    #[error("Unexpected argument: {0}")]
    Unexpected(String),
}

#[derive(Debug, Default)]
struct Args {
    mesh: Option<String>,
    config: Option<String>,
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Args::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" | "-c" => {
                    parsed.config = Some(args.next().ok_or(ArgsError::MissingConfigPath)?);
                }
                _ if parsed.mesh.is_none() && !arg.starts_with('-') => parsed.mesh = Some(arg),
                _ => return Err(ArgsError::Unexpected(arg)),
            }
        }
        Ok(parsed)
    }
}

/// Fades a marker triangle between two colors
struct ColorPulse {
    corners: [Point; 3],
    from: Vec4,
    to: Vec4,
    period: f32,
    elapsed: f32,
}

impl ColorPulse {
    fn new(corners: [Point; 3], from: Vec4, to: Vec4, period: f32) -> Self {
        Self { corners, from, to, period, elapsed: 0.0 }
    }

    fn blend(&self) -> f32 {
        let phase = (self.elapsed / self.period).fract();
        1.0 - (2.0 * phase - 1.0).abs()
    }
}

impl Script for ColorPulse {
    fn process(&mut self, delta: f32) {
        self.elapsed += delta;
    }

    fn draw(&self, server: &mut dyn VisualServer) {
        let from = Point::zero().with_color(self.from);
        let to = Point::zero().with_color(self.to);
        let color = from.lerp(to, self.blend()).color;
        let triangle = self.corners.map(|corner| corner.with_color(color));
        server.draw_polygon(&triangle);
    }

    fn set_owner(&mut self, owner: NodeId) {
        log::debug!("ColorPulse owned by {:?}", owner);
    }
}

/// Counts frames and simulated time, draws nothing
#[derive(Default)]
struct FrameStats {
    frames: u32,
    elapsed: f32,
}

impl Script for FrameStats {
    fn process(&mut self, delta: f32) {
        self.frames += 1;
        self.elapsed += delta;
    }

    fn draw(&self, _server: &mut dyn VisualServer) {}

    fn set_owner(&mut self, _owner: NodeId) {}
}

/// Marker triangle sitting on the centroid of the mesh's first triangle
fn centroid_marker(mesh: &Mesh) -> Option<[Point; 3]> {
    let [a, b, c] = mesh.triangles().next()?;
    let center = Point::barycentric(a, b, c, Vec3::new(1.0, 1.0, 1.0) / 3.0);
    log::info!("First triangle centroid: {:?}", center.position);

    let offset = |x: f32, y: f32| Point::from_position(center.position + Vec4::new(x, y, 0.0, 0.0));
    Some([offset(-0.1, 0.0), offset(0.1, 0.0), offset(0.0, 0.1)])
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse(std::env::args().skip(1))?;

    let config = match &args.config {
        Some(path) => EngineConfig::load_from_file(path)?,
        None => EngineConfig::load_or_default(DEFAULT_CONFIG)?,
    };
    logging::init_with_default(&config.log_level);
    config.validate()?;

    let loader = AssetLoader::new(&config.assets);
    let mesh_name = args.mesh.as_deref().unwrap_or(DEFAULT_MESH);
    let mesh: Mesh = loader.load(mesh_name)?;
    log::info!("{}: {} triangle(s)", mesh_name, mesh.triangle_count());

    let mut scene = Scene::new();
    let marker = centroid_marker(&mesh);

    let model = scene.add_node("model");
    scene.attach_script(model, MeshRenderer::new(mesh))?;
    if let Some(corners) = marker {
        let pulse = ColorPulse::new(
            corners,
            Vec4::new(1.0, 0.2, 0.2, 1.0),
            Vec4::new(0.2, 0.2, 1.0, 1.0),
            1.0,
        );
        scene.attach_script(model, pulse)?;
    }
    let stats = scene.add_node("stats");
    scene.attach_script(stats, FrameStats::default())?;

    let frames = config.frames.frame_count.unwrap_or_else(|| {
        log::warn!("frame_count not set, running a single frame");
        1
    });

    let mut server = PolygonRecorder::new();
    let mut submitted = 0;
    for frame in 0..frames {
        scene.process(config.frames.fixed_delta);
        server.clear();
        scene.draw(&mut server);
        submitted += server.triangle_count();
        log::trace!("frame {}: {} draw call(s)", frame, server.draw_calls());
    }

    if let Some(stats) = scene
        .node(stats)
        .and_then(|node| node.scripts().first())
        .and_then(|script| script.downcast_ref::<FrameStats>())
    {
        log::info!(
            "Ran {} frame(s), {:.3}s simulated, {} triangle(s) submitted",
            stats.frames,
            stats.elapsed,
            submitted
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args, ArgsError> {
        Args::parse(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_args() {
        let parsed = args(&["cube.obj", "--config", "a.ron"]).unwrap();
        assert_eq!(parsed.mesh.as_deref(), Some("cube.obj"));
        assert_eq!(parsed.config.as_deref(), Some("a.ron"));

        assert!(matches!(args(&["--config"]), Err(ArgsError::MissingConfigPath)));
        assert!(matches!(args(&["a.obj", "b.obj"]), Err(ArgsError::Unexpected(_))));
        assert!(args(&[]).unwrap().mesh.is_none());
    }

    #[test]
    fn test_pulse_blend_is_triangle_wave() {
        let mut pulse = ColorPulse::new([Point::default(); 3], Vec4::zeros(), Vec4::zeros(), 2.0);
        assert_eq!(pulse.blend(), 0.0);
        pulse.process(1.0);
        assert!((pulse.blend() - 1.0).abs() < 1e-6);
        pulse.process(1.0);
        assert!(pulse.blend().abs() < 1e-6);
    }

    #[test]
    fn test_pulse_draws_one_triangle() {
        let pulse = ColorPulse::new(
            [Point::default(); 3],
            Vec4::new(1.0, 0.0, 0.0, 1.0),
            Vec4::new(0.0, 0.0, 1.0, 1.0),
            1.0,
        );
        let mut server = PolygonRecorder::new();
        pulse.draw(&mut server);
        assert_eq!(server.triangle_count(), 1);
        assert_eq!(server.polygons()[0][0].color, Vec4::new(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_centroid_marker_needs_a_triangle() {
        assert!(centroid_marker(&Mesh::new()).is_none());

        let mut mesh = Mesh::new();
        mesh.load_from_str("v 0 0 0\nv 3 0 0\nv 0 3 0\nf 1 2 3\n").unwrap();
        let marker = centroid_marker(&mesh).unwrap();
        assert!((marker[2].position.y - 1.1).abs() < 1e-5);
    }
}
