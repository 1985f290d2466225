// Palette tables.  Matplotlib maps are sampled at evenly spaced
// stops; Brewer maps use their largest class count.

use lazy_static::lazy_static;
pub(crate) mod ty;
use ty::*;

// Matplotlib palettes
lazy_static! {
  pub(crate) static ref VIRIDIS: PaletteData = {
  PaletteData {
    typ: PaletteType::Seq,
    rgb: vec![
      RGBA{r:  68.0, g:   1.0, b:  84.0, a: 255.},
      RGBA{r:  71.0, g:  44.0, b: 122.0, a: 255.},
      RGBA{r:  59.0, g:  81.0, b: 139.0, a: 255.},
      RGBA{r:  44.0, g: 113.0, b: 142.0, a: 255.},
      RGBA{r:  33.0, g: 144.0, b: 141.0, a: 255.},
      RGBA{r:  39.0, g: 173.0, b: 129.0, a: 255.},
      RGBA{r:  92.0, g: 200.0, b:  99.0, a: 255.},
      RGBA{r: 170.0, g: 220.0, b:  50.0, a: 255.},
      RGBA{r: 253.0, g: 231.0, b:  37.0, a: 255.},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref MAGMA: PaletteData = {
  PaletteData {
    typ: PaletteType::Seq,
    rgb: vec![
      RGBA{r:   0.0, g:   0.0, b:   4.0, a: 255.},
      RGBA{r:  28.0, g:  16.0, b:  68.0, a: 255.},
      RGBA{r:  79.0, g:  18.0, b: 123.0, a: 255.},
      RGBA{r: 129.0, g:  37.0, b: 129.0, a: 255.},
      RGBA{r: 181.0, g:  54.0, b: 122.0, a: 255.},
      RGBA{r: 229.0, g:  80.0, b: 100.0, a: 255.},
      RGBA{r: 251.0, g: 135.0, b:  97.0, a: 255.},
      RGBA{r: 254.0, g: 194.0, b: 135.0, a: 255.},
      RGBA{r: 252.0, g: 253.0, b: 191.0, a: 255.},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref INFERNO: PaletteData = {
  PaletteData {
    typ: PaletteType::Seq,
    rgb: vec![
      RGBA{r:   0.0, g:   0.0, b:   4.0, a: 255.},
      RGBA{r:  31.0, g:  12.0, b:  72.0, a: 255.},
      RGBA{r:  85.0, g:  15.0, b: 109.0, a: 255.},
      RGBA{r: 136.0, g:  34.0, b: 106.0, a: 255.},
      RGBA{r: 186.0, g:  54.0, b:  85.0, a: 255.},
      RGBA{r: 227.0, g:  89.0, b:  51.0, a: 255.},
      RGBA{r: 249.0, g: 140.0, b:  10.0, a: 255.},
      RGBA{r: 249.0, g: 201.0, b:  50.0, a: 255.},
      RGBA{r: 252.0, g: 255.0, b: 164.0, a: 255.},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref PLASMA: PaletteData = {
  PaletteData {
    typ: PaletteType::Seq,
    rgb: vec![
      RGBA{r:  13.0, g:   8.0, b: 135.0, a: 255.},
      RGBA{r:  76.0, g:   2.0, b: 161.0, a: 255.},
      RGBA{r: 126.0, g:   3.0, b: 168.0, a: 255.},
      RGBA{r: 169.0, g:  35.0, b: 149.0, a: 255.},
      RGBA{r: 204.0, g:  71.0, b: 120.0, a: 255.},
      RGBA{r: 229.0, g: 107.0, b:  93.0, a: 255.},
      RGBA{r: 248.0, g: 148.0, b:  65.0, a: 255.},
      RGBA{r: 253.0, g: 195.0, b:  40.0, a: 255.},
      RGBA{r: 240.0, g: 249.0, b:  33.0, a: 255.},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref CIVIDIS: PaletteData = {
  PaletteData {
    typ: PaletteType::Seq,
    rgb: vec![
      RGBA{r:   0.0, g:  34.0, b:  78.0, a: 255.},
      RGBA{r:  18.0, g:  53.0, b: 112.0, a: 255.},
      RGBA{r:  59.0, g:  73.0, b: 108.0, a: 255.},
      RGBA{r:  87.0, g:  93.0, b: 109.0, a: 255.},
      RGBA{r: 112.0, g: 113.0, b: 115.0, a: 255.},
      RGBA{r: 138.0, g: 135.0, b: 121.0, a: 255.},
      RGBA{r: 166.0, g: 157.0, b: 117.0, a: 255.},
      RGBA{r: 196.0, g: 181.0, b: 108.0, a: 255.},
      RGBA{r: 228.0, g: 207.0, b:  91.0, a: 255.},
      RGBA{r: 254.0, g: 232.0, b:  56.0, a: 255.},
    ]}
  };
}

// Brewer colormaps, see http://colorbrewer2.org/
lazy_static! {
  pub(crate) static ref BLUES: PaletteData = {
  PaletteData {
    typ: PaletteType::Seq,
    rgb: vec![
      RGBA{r: 247.0, g: 251.0, b: 255.0, a: 255.},
      RGBA{r: 222.0, g: 235.0, b: 247.0, a: 255.},
      RGBA{r: 198.0, g: 219.0, b: 239.0, a: 255.},
      RGBA{r: 158.0, g: 202.0, b: 225.0, a: 255.},
      RGBA{r: 107.0, g: 174.0, b: 214.0, a: 255.},
      RGBA{r:  66.0, g: 146.0, b: 198.0, a: 255.},
      RGBA{r:  33.0, g: 113.0, b: 181.0, a: 255.},
      RGBA{r:   8.0, g:  81.0, b: 156.0, a: 255.},
      RGBA{r:   8.0, g:  48.0, b: 107.0, a: 255.},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref GREENS: PaletteData = {
  PaletteData {
    typ: PaletteType::Seq,
    rgb: vec![
      RGBA{r: 247.0, g: 252.0, b: 245.0, a: 255.},
      RGBA{r: 229.0, g: 245.0, b: 224.0, a: 255.},
      RGBA{r: 199.0, g: 233.0, b: 192.0, a: 255.},
      RGBA{r: 161.0, g: 217.0, b: 155.0, a: 255.},
      RGBA{r: 116.0, g: 196.0, b: 118.0, a: 255.},
      RGBA{r:  65.0, g: 171.0, b:  93.0, a: 255.},
      RGBA{r:  35.0, g: 139.0, b:  69.0, a: 255.},
      RGBA{r:   0.0, g: 109.0, b:  44.0, a: 255.},
      RGBA{r:   0.0, g:  68.0, b:  27.0, a: 255.},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref GREYS: PaletteData = {
  PaletteData {
    typ: PaletteType::Seq,
    rgb: vec![
      RGBA{r: 255.0, g: 255.0, b: 255.0, a: 255.},
      RGBA{r: 240.0, g: 240.0, b: 240.0, a: 255.},
      RGBA{r: 217.0, g: 217.0, b: 217.0, a: 255.},
      RGBA{r: 189.0, g: 189.0, b: 189.0, a: 255.},
      RGBA{r: 150.0, g: 150.0, b: 150.0, a: 255.},
      RGBA{r: 115.0, g: 115.0, b: 115.0, a: 255.},
      RGBA{r:  82.0, g:  82.0, b:  82.0, a: 255.},
      RGBA{r:  37.0, g:  37.0, b:  37.0, a: 255.},
      RGBA{r:   0.0, g:   0.0, b:   0.0, a: 255.},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref REDS: PaletteData = {
  PaletteData {
    typ: PaletteType::Seq,
    rgb: vec![
      RGBA{r: 255.0, g: 245.0, b: 240.0, a: 255.},
      RGBA{r: 254.0, g: 224.0, b: 210.0, a: 255.},
      RGBA{r: 252.0, g: 187.0, b: 161.0, a: 255.},
      RGBA{r: 252.0, g: 146.0, b: 114.0, a: 255.},
      RGBA{r: 251.0, g: 106.0, b:  74.0, a: 255.},
      RGBA{r: 239.0, g:  59.0, b:  44.0, a: 255.},
      RGBA{r: 203.0, g:  24.0, b:  29.0, a: 255.},
      RGBA{r: 165.0, g:  15.0, b:  21.0, a: 255.},
      RGBA{r: 103.0, g:   0.0, b:  13.0, a: 255.},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref YLORRD: PaletteData = {
  PaletteData {
    typ: PaletteType::Seq,
    rgb: vec![
      RGBA{r: 255.0, g: 255.0, b: 204.0, a: 255.},
      RGBA{r: 255.0, g: 237.0, b: 160.0, a: 255.},
      RGBA{r: 254.0, g: 217.0, b: 118.0, a: 255.},
      RGBA{r: 254.0, g: 178.0, b:  76.0, a: 255.},
      RGBA{r: 253.0, g: 141.0, b:  60.0, a: 255.},
      RGBA{r: 252.0, g:  78.0, b:  42.0, a: 255.},
      RGBA{r: 227.0, g:  26.0, b:  28.0, a: 255.},
      RGBA{r: 189.0, g:   0.0, b:  38.0, a: 255.},
      RGBA{r: 128.0, g:   0.0, b:  38.0, a: 255.},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref RDBU: PaletteData = {
  PaletteData {
    typ: PaletteType::Div,
    rgb: vec![
      RGBA{r: 103.0, g:   0.0, b:  31.0, a: 255.},
      RGBA{r: 178.0, g:  24.0, b:  43.0, a: 255.},
      RGBA{r: 214.0, g:  96.0, b:  77.0, a: 255.},
      RGBA{r: 244.0, g: 165.0, b: 130.0, a: 255.},
      RGBA{r: 253.0, g: 219.0, b: 199.0, a: 255.},
      RGBA{r: 247.0, g: 247.0, b: 247.0, a: 255.},
      RGBA{r: 209.0, g: 229.0, b: 240.0, a: 255.},
      RGBA{r: 146.0, g: 197.0, b: 222.0, a: 255.},
      RGBA{r:  67.0, g: 147.0, b: 195.0, a: 255.},
      RGBA{r:  33.0, g: 102.0, b: 172.0, a: 255.},
      RGBA{r:   5.0, g:  48.0, b:  97.0, a: 255.},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref SPECTRAL: PaletteData = {
  PaletteData {
    typ: PaletteType::Div,
    rgb: vec![
      RGBA{r: 158.0, g:   1.0, b:  66.0, a: 255.},
      RGBA{r: 213.0, g:  62.0, b:  79.0, a: 255.},
      RGBA{r: 244.0, g: 109.0, b:  67.0, a: 255.},
      RGBA{r: 253.0, g: 174.0, b:  97.0, a: 255.},
      RGBA{r: 254.0, g: 224.0, b: 139.0, a: 255.},
      RGBA{r: 255.0, g: 255.0, b: 191.0, a: 255.},
      RGBA{r: 230.0, g: 245.0, b: 152.0, a: 255.},
      RGBA{r: 171.0, g: 221.0, b: 164.0, a: 255.},
      RGBA{r: 102.0, g: 194.0, b: 165.0, a: 255.},
      RGBA{r:  50.0, g: 136.0, b: 189.0, a: 255.},
      RGBA{r:  94.0, g:  79.0, b: 162.0, a: 255.},
    ]}
  };
}
