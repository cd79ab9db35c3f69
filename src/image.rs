//! Generate images of empty or filled crosswords

use std::fmt::{Result, Write};
use std::fs::File;
use std::io;
use std::io::{BufWriter, Write as ioWrite};
use std::path::Path;

use itertools::Itertools;
use once_cell::sync::Lazy;
use vec_map::VecMap;
use xml::Xml;

use crate::collections::Coord;
use crate::crossword::{Crossword, Solution};
use crate::image::xml::XmlProducer;

#[macro_use]
mod xml;

// colors
const COLOR_BLOCKED: &str = "black";
const COLOR_OPEN: &str = "white";
const COLOR_LETTER: &str = "black";

// dimensions
const CELL_WIDTH: usize = 100;
const CELL_BORDER: usize = 2;

// font sizes
const FONT_SIZE_LETTER: usize = 80;

static STYLE: Lazy<String> = Lazy::new(|| {
    format!(
        "\
        .letters{{\
          font-family:sans-serif;\
          font-size:{letter_font_size}px;\
          fill:{color_letter};\
          text-anchor:middle\
        }}",
        letter_font_size = FONT_SIZE_LETTER,
        color_letter = COLOR_LETTER,
    )
});

/// Creates an image of a crossword, optionally filled with a solution
pub struct CrosswordImageBuilder<'a> {
    crossword: &'a Crossword,
    solution: Option<&'a Solution>,
}

impl<'a> CrosswordImageBuilder<'a> {
    pub fn new(crossword: &'a Crossword) -> Self {
        Self {
            crossword,
            solution: None,
        }
    }

    pub fn solution(&mut self, solution: &'a Solution) -> &mut Self {
        self.solution = Some(solution);
        self
    }

    pub fn build(self) -> CrosswordImage<'a> {
        let crossword = self.crossword;
        let mut letters = VecMap::new();
        if let Some(solution) = self.solution {
            let grid = solution.letter_grid(crossword);
            for (i, letter) in grid.iter().enumerate() {
                if let Some(letter) = *letter {
                    letters.insert(i, letter);
                }
            }
        }
        CrosswordImage {
            crossword,
            letters,
            width: CELL_WIDTH * crossword.width(),
            height: CELL_WIDTH * crossword.height(),
        }
    }
}

pub struct CrosswordImage<'a> {
    crossword: &'a Crossword,
    /// letters by flat cell index
    letters: VecMap<char>,
    width: usize,
    height: usize,
}

impl CrosswordImage<'_> {
    pub fn save_svg(&self, path: &Path) -> io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        write!(writer, "{}", self.svg())?;
        writer.flush()?;
        Ok(())
    }

    /// Renders the image as an SVG document
    pub fn svg(&self) -> String {
        XmlProducer::new(|xml| CrosswordSvgContext { image: self, xml }.write()).to_string()
    }
}

struct CrosswordSvgContext<'a, 'b, 'c> {
    image: &'a CrosswordImage<'a>,
    xml: &'a mut Xml<'b, 'c>,
}

impl CrosswordSvgContext<'_, '_, '_> {
    fn write(mut self) -> Result {
        self.header()?;
        self.background()?;
        self.open_cells()?;
        self.letters()
    }

    fn header(&mut self) -> Result {
        xml! {
            self.xml,
            open "svg",
            "xmlns" = "http://www.w3.org/2000/svg",
            "viewBox" = format!("0 0 {} {}", self.image.width, self.image.height),
            open "style",
            text = STYLE.as_str(),
            close,
        }
        Ok(())
    }

    fn background(&mut self) -> Result {
        xml! {
            self.xml,
            open "rect",
            "width" = self.image.width,
            "height" = self.image.height,
            "fill" = COLOR_BLOCKED,
            close,
        }
        Ok(())
    }

    /// Fills each run of open cells in a row with one rectangle, then draws the borders between
    /// the cells of a run
    fn open_cells(&mut self) -> Result {
        let crossword = self.image.crossword;
        let mut fill = String::new();
        let mut borders = String::new();
        for i in 0..crossword.height() {
            let runs = (0..crossword.width())
                .filter(|&j| crossword.is_open(Coord::new(i, j)))
                // run start position and run length in cells
                .map(|j| (j, 1))
                .coalesce(|a, b| {
                    if b.0 == a.0 + a.1 {
                        Ok((a.0, a.1 + b.1))
                    } else {
                        Err((a, b))
                    }
                });
            for (j, len) in runs {
                let pos = cell_coord(Coord::new(i, j));
                write!(
                    fill,
                    "M{x},{}h{}v{}H{x}z",
                    pos.row() + CELL_BORDER,
                    CELL_WIDTH * len - CELL_BORDER * 2,
                    CELL_WIDTH - CELL_BORDER * 2,
                    x = pos.col() + CELL_BORDER,
                )?;
                for k in 1..len {
                    let pos = cell_coord(Coord::new(i, j + k));
                    write!(borders, "M{},{}v{}", pos.col(), pos.row(), CELL_WIDTH)?;
                }
            }
        }
        xml! {
            self.xml,
            open "path",
            "fill" = COLOR_OPEN,
            "d" = fill,
            close,
        }
        if !borders.is_empty() {
            xml! {
                self.xml,
                open "path",
                "stroke" = COLOR_BLOCKED,
                "stroke-width" = CELL_BORDER * 2,
                "d" = borders,
                close,
            }
        }
        Ok(())
    }

    fn letters(&mut self) -> Result {
        if self.image.letters.is_empty() {
            return Ok(());
        }
        let width = self.image.crossword.width();
        xml!(self.xml, open "g", "class" = "letters");
        for (index, &letter) in &self.image.letters {
            let pos = cell_coord(Coord::from_index(index, width));
            xml! {
                self.xml,
                open "text",
                "x" = pos.col() + CELL_WIDTH / 2,
                "y" = pos.row() + CELL_WIDTH / 2,
                "dy" = ".35em",
                text = letter,
                close,
            }
        }
        xml!(self.xml, close);
        Ok(())
    }
}

/// The top left corner of a cell in image units
fn cell_coord(coord: Coord) -> ImagePos {
    ImagePos {
        x: coord.col() * CELL_WIDTH,
        y: coord.row() * CELL_WIDTH,
    }
}

#[derive(Clone, Copy)]
struct ImagePos {
    x: usize,
    y: usize,
}

impl ImagePos {
    fn col(self) -> usize {
        self.x
    }

    fn row(self) -> usize {
        self.y
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::crossword::{Crossword, Direction, Solution, Variable};
    use crate::image::CrosswordImageBuilder;

    #[test]
    fn empty_crossword() {
        let crossword = Crossword::parse("__#\n#__").unwrap();
        let svg = CrosswordImageBuilder::new(&crossword).build().svg();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"viewBox="0 0 300 200""#));
        // one run per row, each with one border inside
        assert!(svg.contains(r#"d="M2,2h196v96H2zM102,102h196v96H102z""#));
        assert!(svg.contains(r#"d="M100,0v100M200,100v100""#));
        assert!(!svg.contains("<text"));
    }

    #[test]
    fn wide_crossword_dimensions() {
        let crossword = Crossword::parse(&"_".repeat(50_000)).unwrap();
        let image = CrosswordImageBuilder::new(&crossword).build();
        assert_eq!(5_000_000, image.width);
        assert_eq!(100, image.height);
        assert!(image.svg().contains(r#"d="M2,2h4999996v96H2z""#));
    }

    #[test]
    fn filled_crossword() {
        let crossword = Crossword::parse("___").unwrap();
        let solution: Solution = vec![(Variable::new(0, 0, Direction::Across, 3), "A&B")]
            .into_iter()
            .collect();
        let mut builder = CrosswordImageBuilder::new(&crossword);
        builder.solution(&solution);
        let svg = builder.build().svg();
        assert!(svg.contains(r#"<text x="50" y="50" dy=".35em">A</text>"#));
        assert!(svg.contains(">&amp;</text>"));
        assert!(svg.contains(r#"<text x="250" y="50" dy=".35em">B</text>"#));
    }

    #[test]
    fn save_svg() {
        let crossword = Crossword::parse("___").unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crossword.svg");
        let image = CrosswordImageBuilder::new(&crossword).build();
        image.save_svg(&path).unwrap();
        assert_eq!(image.svg(), fs::read_to_string(&path).unwrap());
    }
}
