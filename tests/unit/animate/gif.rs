use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Duration;

use image::{AnimationDecoder, Rgba, RgbaImage, codecs::gif::GifDecoder};

use super::*;

fn out_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_animate").join(name);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_frame(path: &Path, w: u32, h: u32, px: [u8; 4]) {
    RgbaImage::from_pixel(w, h, Rgba(px)).save(path).unwrap();
}

fn decode(path: &Path) -> Vec<image::Frame> {
    let reader = BufReader::new(File::open(path).unwrap());
    GifDecoder::new(reader)
        .unwrap()
        .into_frames()
        .collect_frames()
        .unwrap()
}

fn tiny_overrides() -> ChartOverrides {
    ChartOverrides::from_json(r#"{"dpi": 2}"#).unwrap()
}

#[test]
fn default_output_is_animation_gif() {
    let animator = Animator::new();
    assert_eq!(animator.output_file(), Path::new(DEFAULT_ANIMATION_FILE));

    let mut animator = Animator::new();
    animator.set_output_file("front.gif");
    assert_eq!(animator.output_file(), Path::new("front.gif"));
}

#[test]
fn animating_without_frames_fails() {
    let err = Animator::new()
        .animate(Some(&out_dir("empty").join("a.gif")))
        .unwrap_err();
    assert!(matches!(err, VizError::Animation(_)));
}

#[test]
fn missing_frame_file_is_an_animation_error() {
    let animator = Animator::with_files(vec![PathBuf::from("target/no/such/frame.png")]);
    let err = animator
        .animate(Some(&out_dir("missing").join("a.gif")))
        .unwrap_err();
    assert!(matches!(err, VizError::Animation(_)));
}

#[test]
fn frames_share_the_first_frame_size_and_interval() {
    let dir = out_dir("frames");
    let a = dir.join("a.png");
    let b = dir.join("b.png");
    let c = dir.join("c.png");
    write_frame(&a, 8, 6, [255, 0, 0, 255]);
    write_frame(&b, 12, 12, [0, 0, 255, 255]);
    write_frame(&c, 4, 4, [0, 255, 0, 255]);

    let animator = Animator::with_files(vec![a, b, c]);
    let out = animator.animate(Some(&dir.join("out.gif"))).unwrap();
    assert_eq!(out, dir.join("out.gif"));

    let frames = decode(&out);
    assert_eq!(frames.len(), 3);
    for frame in &frames {
        assert_eq!(frame.buffer().dimensions(), (8, 6));
        assert_eq!(
            Duration::from(frame.delay()),
            Duration::from_millis(u64::from(FRAME_INTERVAL_MS))
        );
    }
    // The small third frame sits on white.
    let last = frames[2].buffer();
    assert!(last.get_pixel(1, 1)[1] > 200 && last.get_pixel(1, 1)[0] < 60);
    assert!(last.get_pixel(7, 5).0[..3].iter().all(|&v| v > 200));
}

#[test]
fn unknown_kind_renders_nothing() {
    let mut animator = Animator::new();
    let n = animator
        .plot_to_animate(&[PathBuf::from("a.pof")], &tiny_overrides(), "pie")
        .unwrap();
    assert_eq!(n, 0);
    assert!(animator.files().is_empty());
}

#[test]
fn each_input_becomes_a_numbered_frame() {
    let dir = out_dir("plot");
    let inputs: Vec<PathBuf> = (0..2)
        .map(|i| {
            let path = dir.join(format!("gen{i}.pof"));
            let shift = i as f64 * 0.1;
            std::fs::write(
                &path,
                format!("f1 f2\n0.1 {}\n0.4 {}\n0.8 {}\n", 0.9 - shift, 0.5 - shift, 0.2),
            )
            .unwrap();
            path
        })
        .collect();

    let mut animator = Animator::new();
    let n = animator
        .plot_to_animate(&inputs, &tiny_overrides(), "plot2d")
        .unwrap();
    assert_eq!(n, 2);
    assert_eq!(
        animator.files(),
        &[dir.join("gen0.pof_1.png"), dir.join("gen1.pof_2.png")]
    );

    let gif = animator.animate(Some(&dir.join("front.gif"))).unwrap();
    assert_eq!(decode(&gif).len(), 2);
}

#[test]
fn camera_sweep_inputs_contribute_every_view() {
    let dir = out_dir("sweep");
    let input = dir.join("front.pof");
    std::fs::write(&input, "f1 f2 f3\n0.1 0.2 0.3\n0.3 0.1 0.2\n0.2 0.3 0.1\n").unwrap();

    let mut animator = Animator::new();
    let n = animator
        .plot_to_animate(std::slice::from_ref(&input), &tiny_overrides(), "plot3d")
        .unwrap();
    assert_eq!(n, 5);
    assert_eq!(animator.files()[0], dir.join("front.pof_1_1.png"));
}
