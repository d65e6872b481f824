use std::{collections::HashMap, fs};

use anyhow::Result;
use ecb_viz::*;
use rgb::RGBA8;
use tempfile::tempdir;

const WHITE: RGBA8 = RGBA8 { r: 255, g: 255, b: 255, a: 255 };
const BLACK: RGBA8 = RGBA8 { r: 0, g: 0, b: 0, a: 255 };
const FIRST: RGBA8 = RGBA8 { r: 50, g: 80, b: 110, a: 255 };

fn xorshift64(seed: &mut u64) -> u64 {
    let mut x = *seed;
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    *seed = x;
    x
}

/// `n` blocks drawn among `kinds` distinct ones, plus `tail` bytes.
fn ecb_like(n: usize, kinds: u64, tail: usize, mut seed: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(n * BLOCK_SIZE + tail);
    for _ in 0 .. n {
        let k = xorshift64(&mut seed) % kinds;
        out.extend((0 .. BLOCK_SIZE as u64).map(|i| (k * 31 + i) as u8));
    }
    out.extend(std::iter::repeat(0xAA).take(tail));
    out
}

fn cells(canvas: &Canvas<RGBA8>, flip: bool) -> Vec<RGBA8> {
    let canvas = if flip { canvas.flipped() } else { canvas.clone() };
    canvas.rows().flatten().flatten().copied().collect()
}

#[test]
fn zero_blocks_are_white() -> Result<()> {
    let canvas = visualize::<RGBA8>(&[0; 32], &Config::default())?;
    assert_eq!(canvas.dimensions(), (1, 2));
    assert_eq!(cells(&canvas, true), [WHITE, WHITE]);
    Ok(())
}

#[test]
fn ties_broken_by_first_occurrence() -> Result<()> {
    let bytes = [[0u8; 16], [1; 16]].concat();
    let config = Config::new().flip(false);
    let canvas = visualize::<RGBA8>(&bytes, &config)?;
    assert_eq!(canvas.dimensions(), (1, 2));
    assert_eq!(canvas.get(0, 0), Some(WHITE));
    assert_eq!(canvas.get(0, 1), Some(FIRST));
    // Swapping the blocks swaps the colors.
    let bytes = [[1u8; 16], [0; 16]].concat();
    let canvas = visualize::<RGBA8>(&bytes, &config)?;
    assert_eq!(canvas.get(0, 0), Some(WHITE));
    assert_eq!(canvas.get(0, 1), Some(FIRST));
    Ok(())
}

#[test]
fn rejects_bad_configurations() {
    for config in [Config::new().colors(0), Config::new().colors(1),
                   Config::new().pix_width(0), Config::new().pix_width(5),
                   Config::new().pix_width(17)] {
        assert!(matches!(visualize::<RGBA8>(&[0; 64], &config),
                         Err(Error::InvalidConfig(_))), "{config:?}");
    }
}

#[test]
fn rejects_short_input() {
    for len in [0, 1, 15] {
        assert!(matches!(visualize::<RGBA8>(&vec![9u8; len], &Config::default()),
                         Err(Error::EmptyInput { .. })));
    }
}

#[test]
fn same_block_same_color() -> Result<()> {
    let bytes = ecb_like(500, 40, 7, 0x9E37_79B9_7F4A_7C15);
    for pix_width in [16, 4, 1] {
        let config = Config::new().colors(12).pix_width(pix_width);
        let repeat = config.pixel_repeat();
        let canvas = visualize::<RGBA8>(&bytes, &config)?;
        let pixels = cells(&canvas, true);
        assert_eq!(pixels.len(), 500 * repeat);
        let mut seen: HashMap<&[u8], RGBA8> = HashMap::new();
        for (i, block) in bytes.chunks_exact(BLOCK_SIZE).enumerate() {
            let run = &pixels[i * repeat .. (i + 1) * repeat];
            assert!(run.iter().all(|&c| c == run[0]));
            let c = *seen.entry(block).or_insert(run[0]);
            assert_eq!(c, run[0], "block {i}");
        }
    }
    Ok(())
}

#[test]
fn rank_decides_color() -> Result<()> {
    let bytes = ecb_like(1000, 30, 0, 42);
    let blocks = segment(&bytes)?;
    let ranked = RankedList::rank(&blocks);
    assert_eq!(ranked.total(), blocks.len());
    let colors = 8;
    let palette = Palette::<RGBA8>::new(colors)?;
    let canvas = visualize::<RGBA8>(&bytes, &Config::new().colors(colors))?;
    let pixels = cells(&canvas, true);
    for (rank, entry) in ranked.iter().enumerate() {
        let c = pixels[entry.first_seen];
        if rank == 0 {
            assert_eq!(c, WHITE);
        } else if rank < colors - 1 {
            assert_eq!(Some(c), palette.get(rank));
        } else {
            assert_eq!(c, BLACK, "rank {rank}");
        }
    }
    Ok(())
}

#[test]
fn deterministic() -> Result<()> {
    let bytes = ecb_like(777, 200, 3, 7);
    let a = visualize::<RGBA8>(&bytes, &Config::default())?;
    let b = visualize::<RGBA8>(&bytes, &Config::default())?;
    assert_eq!(a, b);
    let up = visualize::<RGBA8>(&bytes, &Config::new().flip(false))?;
    assert_eq!(up.flipped(), a);
    Ok(())
}

#[test]
fn writes_png_next_to_input() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("tux.bmp");
    fs::write(&input, ecb_like(100, 5, 9, 3))?;
    let output = output_path(&input);
    assert_eq!(output, dir.path().join("tux.bmp_aes.png"));
    let report = render_file(&input, &output, &Config::default())?;
    assert_eq!((report.blocks, report.width, report.height), (100, 10, 10));
    assert!(report.distinct <= 5);
    let img = image::open(&output)?.to_rgba8();
    assert_eq!(img.dimensions(), (10, 10));
    let canvas = visualize::<RGBA8>(&fs::read(&input)?, &Config::default())?;
    for (x, y, p) in img.enumerate_pixels() {
        let c = canvas.get(x as usize, y as usize).unwrap_or_default();
        assert_eq!(p.0, [c.r, c.g, c.b, c.a]);
    }
    Ok(())
}

#[test]
fn file_errors() -> Result<()> {
    let dir = tempdir()?;
    let missing = dir.path().join("missing.bin");
    let out = dir.path().join("out.png");
    assert!(matches!(render_file(&missing, &out, &Config::default()),
                     Err(Error::InputRead { .. })));

    let short = dir.path().join("short.bin");
    fs::write(&short, [1u8; 10])?;
    assert!(matches!(render_file(&short, &out, &Config::default()),
                     Err(Error::EmptyInput { len: 10 })));

    let input = dir.path().join("ok.bin");
    fs::write(&input, [1u8; 64])?;
    let unwritable = dir.path().join("no-such-dir").join("out.png");
    assert!(matches!(render_file(&input, &unwritable, &Config::default()),
                     Err(Error::OutputWrite { .. })));
    assert!(!out.exists());
    Ok(())
}
