//! Built-in templates shipped with the binary.
//!
//! These are the defaults the in-memory store preloads when no template
//! directory is configured. Stage templates (`extractor`, `transform`,
//! `loader`) are written verbatim; `routes` and `etl` go through placeholder
//! substitution with `{{CATEGORY}}`, `{{SUBCATEGORY}}`, `{{PROJECT_NAME}}`,
//! and `{{CLASS_NAME}}`.

use etlforge_core::domain::TemplateId;

const EXTRACTOR: &str = r#"
import logging

logger = logging.getLogger(__name__)


class Extractor:
    """Pulls raw records from the configured source."""

    def __init__(self, source=None):
        self.source = source

    def extract(self):
        logger.info("Extracting records from %s", self.source)
        raise NotImplementedError("implement extract() for this project")
"#;

const TRANSFORM: &str = r#"
import logging

logger = logging.getLogger(__name__)


class Transform:
    """Reshapes extracted records into the load format."""

    def transform(self, records):
        logger.info("Transforming %d records", len(records))
        raise NotImplementedError("implement transform() for this project")
"#;

const LOADER: &str = r#"
import logging

logger = logging.getLogger(__name__)


class Loader:
    """Writes transformed records to the configured destination."""

    def __init__(self, destination=None):
        self.destination = destination

    def load(self, records):
        logger.info("Loading %d records into %s", len(records), self.destination)
        raise NotImplementedError("implement load() for this project")
"#;

const ROUTES: &str = r#"
from fastapi import APIRouter

from workflows.etl import {{CLASS_NAME}}ETL

router = APIRouter(prefix="/{{PROJECT_NAME}}", tags=["{{PROJECT_NAME}}"])


@router.post("/run")
def run_{{PROJECT_NAME}}():
    """Trigger the {{PROJECT_NAME}} pipeline."""
    return {{CLASS_NAME}}ETL().run()
"#;

const ETL: &str = r#"
import logging

logger = logging.getLogger(__name__)


class {{CLASS_NAME}}ETL:
    """Pipeline entry point for {{CATEGORY}}/{{SUBCATEGORY}}/{{PROJECT_NAME}}."""

    category = "{{CATEGORY}}"
    subcategory = "{{SUBCATEGORY}}"
    project_name = "{{PROJECT_NAME}}"

    def run(self):
        logger.info("Running %s pipeline", self.project_name)
        results = {}
        return results
"#;

/// Raw text of a single built-in template.
pub const fn template_text(id: TemplateId) -> &'static str {
    match id {
        TemplateId::Extractor => EXTRACTOR,
        TemplateId::Transform => TRANSFORM,
        TemplateId::Loader => LOADER,
        TemplateId::Routes => ROUTES,
        TemplateId::Etl => ETL,
    }
}

/// All built-in templates, in generation order.
pub fn all_templates() -> Vec<(TemplateId, &'static str)> {
    TemplateId::ALL
        .into_iter()
        .map(|id| (id, template_text(id)))
        .collect()
}
