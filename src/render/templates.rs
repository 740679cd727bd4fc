use std::path::Path;

use log::info;

use crate::{
    domain::artist::{Artist, DetailRecord},
    render::{
        RenderError, Renderer, TemplateError,
        html::{display_date, display_location, escape},
    },
};

const LIST: &str = "artists.html";
const DETAIL: &str = "artist.html";
const ERROR: &str = "error.html";

const LIST_MARKERS: &[&str] = &["ARTISTS"];
const DETAIL_MARKERS: &[&str] = &["NAME", "MEMBERS", "CONCERTS"];
const ERROR_MARKERS: &[&str] = &[];

/// A page with `{{MARKER}}` slots.
struct Template {
    name: &'static str,
    source: String,
}

impl Template {
    fn new(
        name: &'static str,
        source: String,
        required: &[&'static str],
    ) -> Result<Self, TemplateError> {
        if let Some(marker) = required
            .iter()
            .copied()
            .find(|marker| !source.contains(&format!("{{{{{marker}}}}}")))
        {
            return Err(TemplateError::MissingMarker {
                template: name,
                marker,
            });
        }
        Ok(Self { name, source })
    }

    /// Single pass over the source, so substituted text is never scanned for markers.
    fn render(&self, values: &[(&str, &str)]) -> Result<String, RenderError> {
        let mut out = String::with_capacity(self.source.len());
        let mut rest = self.source.as_str();

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else {
                out.push_str(&rest[start..]);
                rest = "";
                break;
            };

            let marker = &after[..end];
            let (_, value) = values
                .iter()
                .find(|(key, _)| *key == marker)
                .ok_or_else(|| RenderError::UnknownMarker {
                    template: self.name,
                    marker: marker.to_string(),
                })?;
            out.push_str(value);
            rest = &after[end + 2..];
        }

        out.push_str(rest);
        Ok(out)
    }
}

/// The three pages of the site, parsed once at startup and shared by all requests.
pub struct Templates {
    list: Template,
    detail: Template,
    error: Template,
}

impl Templates {
    /// Templates compiled into the binary.
    pub fn embedded() -> Result<Self, TemplateError> {
        Self::from_sources(
            include_str!("../../templates/artists.html").to_string(),
            include_str!("../../templates/artist.html").to_string(),
            include_str!("../../templates/error.html").to_string(),
        )
    }

    /// Reads `artists.html`, `artist.html` and `error.html` from `dir`.
    pub fn load(dir: &Path) -> Result<Self, TemplateError> {
        let read = |name: &str| {
            let path = dir.join(name);
            std::fs::read_to_string(&path).map_err(|source| TemplateError::Io { path, source })
        };
        Self::from_sources(read(LIST)?, read(DETAIL)?, read(ERROR)?)
    }

    pub fn from_dir(dir: Option<&Path>) -> Result<Self, TemplateError> {
        match dir {
            Some(dir) => {
                info!("Loading templates from {}", dir.to_string_lossy());
                Self::load(dir)
            }
            None => Self::embedded(),
        }
    }

    fn from_sources(list: String, detail: String, error: String) -> Result<Self, TemplateError> {
        Ok(Self {
            list: Template::new(LIST, list, LIST_MARKERS)?,
            detail: Template::new(DETAIL, detail, DETAIL_MARKERS)?,
            error: Template::new(ERROR, error, ERROR_MARKERS)?,
        })
    }
}

impl Renderer for Templates {
    fn artist_list(&self, artists: &[Artist]) -> Result<String, RenderError> {
        let cards: String = artists
            .iter()
            .map(|artist| {
                format!(
                    "<a class=\"card\" href=\"/artist?id={id}\"><img src=\"{image}\" alt=\"{name}\"><h2>{name}</h2><p>{year}</p></a>\n",
                    id = artist.id,
                    image = escape(&artist.image),
                    name = escape(&artist.name),
                    year = artist.creation_date,
                )
            })
            .collect();

        self.list.render(&[
            ("ARTISTS", cards.as_str()),
            ("ARTIST_COUNT", artists.len().to_string().as_str()),
        ])
    }

    fn artist_detail(&self, detail: &DetailRecord) -> Result<String, RenderError> {
        let artist = &detail.artist;

        let members = list_items(artist.members.iter().map(|m| escape(m)));
        let locations = list_items(
            detail
                .location
                .locations
                .iter()
                .map(|l| escape(&display_location(l))),
        );
        let dates = list_items(detail.date.dates.iter().map(|d| escape(display_date(d))));
        let concerts: String = detail
            .relation
            .sorted_entries()
            .into_iter()
            .map(|(location, dates)| {
                let dates: Vec<String> = dates.iter().map(|d| escape(display_date(d))).collect();
                format!(
                    "<tr><td>{}</td><td>{}</td></tr>\n",
                    escape(&display_location(location)),
                    dates.join(", ")
                )
            })
            .collect();

        self.detail.render(&[
            ("NAME", escape(&artist.name).as_str()),
            ("IMAGE", escape(&artist.image).as_str()),
            ("CREATION_DATE", artist.creation_date.to_string().as_str()),
            ("FIRST_ALBUM", escape(&artist.first_album).as_str()),
            ("MEMBERS", members.as_str()),
            ("CONCERTS", concerts.as_str()),
            ("LOCATIONS", locations.as_str()),
            ("DATES", dates.as_str()),
        ])
    }

    fn not_found(&self, requested: &str) -> Result<String, RenderError> {
        let message = if requested.is_empty() {
            "No artist id was given.".to_string()
        } else {
            format!("No artist matches id \"{}\".", escape(requested))
        };
        self.error.render(&[("MESSAGE", message.as_str())])
    }
}

fn list_items(items: impl Iterator<Item = String>) -> String {
    items.map(|item| format!("<li>{item}</li>\n")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::id::ArtistId;
    use crate::upstream::Upstream;
    use crate::upstream::stub::{StubUpstream, artist};

    fn detail_for(id: u32) -> anyhow::Result<DetailRecord> {
        let upstream = StubUpstream::default();
        Ok(DetailRecord {
            artist: artist(id, "Queen"),
            location: upstream.locations(ArtistId(id))?,
            date: upstream.dates(ArtistId(id))?,
            relation: upstream.relation(ArtistId(id))?,
        })
    }

    #[test]
    fn test_embedded_templates_are_valid() {
        assert!(Templates::embedded().is_ok());
    }

    #[test]
    fn test_list_keeps_upstream_order() -> anyhow::Result<()> {
        let templates = Templates::embedded()?;
        let artists = vec![artist(3, "Pink Floyd"), artist(1, "Queen"), artist(2, "SOJA")];

        let page = templates.artist_list(&artists)?;

        let floyd = page.find("Pink Floyd").unwrap();
        let queen = page.find("Queen").unwrap();
        let soja = page.find("SOJA").unwrap();
        assert!(floyd < queen && queen < soja);
        assert!(page.contains("href=\"/artist?id=3\""));
        assert!(page.contains("3 artists"));

        Ok(())
    }

    #[test]
    fn test_list_escapes_names() -> anyhow::Result<()> {
        let templates = Templates::embedded()?;

        let page = templates.artist_list(&[artist(1, "<b>AC/DC</b>")])?;

        assert!(page.contains("&lt;b&gt;AC/DC&lt;/b&gt;"));
        assert!(!page.contains("<b>AC/DC</b>"));

        Ok(())
    }

    #[test]
    fn test_detail_page_shows_all_resources() -> anyhow::Result<()> {
        let templates = Templates::embedded()?;

        let page = templates.artist_detail(&detail_for(1)?)?;

        assert!(page.contains("<h1>Queen</h1>"));
        assert!(page.contains("<li>Queen singer</li>"));
        assert!(page.contains("Created in 1961"));
        assert!(page.contains("<li>North Carolina, USA</li>"));
        assert!(page.contains("<li>23-08-2019</li>"));
        assert!(!page.contains("*23-08-2019"));

        let carolina = page.find("<td>North Carolina, USA</td>").unwrap();
        let osaka = page.find("<td>Osaka, Japan</td>").unwrap();
        assert!(carolina < osaka);

        Ok(())
    }

    #[test]
    fn test_not_found_escapes_requested_id() -> anyhow::Result<()> {
        let templates = Templates::embedded()?;

        let page = templates.not_found("<script>")?;
        assert!(page.contains("&lt;script&gt;"));

        let page = templates.not_found("")?;
        assert!(page.contains("No artist id was given."));

        Ok(())
    }

    #[test]
    fn test_load_from_dir() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        std::fs::write(dir.path().join(LIST), "<ul>{{ARTISTS}}</ul>")?;
        std::fs::write(dir.path().join(DETAIL), "{{NAME}}|{{MEMBERS}}|{{CONCERTS}}")?;
        std::fs::write(dir.path().join(ERROR), "gone")?;

        let templates = Templates::from_dir(Some(dir.path()))?;

        assert_eq!(templates.not_found("7")?, "gone");
        let page = templates.artist_list(&[artist(1, "Queen")])?;
        assert!(page.starts_with("<ul><a class=\"card\""));

        Ok(())
    }

    #[test]
    fn test_load_rejects_missing_marker() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        std::fs::write(dir.path().join(LIST), "<ul></ul>")?;
        std::fs::write(dir.path().join(DETAIL), "{{NAME}}{{MEMBERS}}{{CONCERTS}}")?;
        std::fs::write(dir.path().join(ERROR), "gone")?;

        let err = Templates::load(dir.path()).err().unwrap();
        assert!(matches!(
            err,
            TemplateError::MissingMarker {
                template: LIST,
                marker: "ARTISTS"
            }
        ));
        assert_eq!(err.to_string(), "template artists.html is missing marker {{ARTISTS}}");

        Ok(())
    }

    #[test]
    fn test_load_reports_missing_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;

        let err = Templates::load(dir.path()).err().unwrap();
        assert!(matches!(err, TemplateError::Io { .. }));

        Ok(())
    }

    #[test]
    fn test_unknown_marker_fails_render() -> anyhow::Result<()> {
        let template = Template::new(ERROR, "{{MESAGE}}".to_string(), &[])?;

        let err = template.render(&[("MESSAGE", "x")]).unwrap_err();
        assert!(matches!(err, RenderError::UnknownMarker { marker, .. } if marker == "MESAGE"));

        Ok(())
    }

    #[test]
    fn test_substituted_text_is_not_rescanned() -> anyhow::Result<()> {
        let template = Template::new(ERROR, "[{{A}}][{{B}}]".to_string(), &[])?;

        let out = template.render(&[("A", "{{B}}"), ("B", "b")])?;
        assert_eq!(out, "[{{B}}][b]");

        Ok(())
    }
}
