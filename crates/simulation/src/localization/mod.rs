//! Dashboard string tables.
//!
//! Spanish is the dashboard's native language and the fallback for any key
//! missing from another table. Export file names never go through here.

use bevy::prelude::*;
use std::collections::BTreeMap;

// =============================================================================
// Constants
// =============================================================================

/// Default locale used when no locale is explicitly set.
pub const DEFAULT_LOCALE: &str = "es";

/// All supported locale codes.
pub const SUPPORTED_LOCALES: &[&str] = &["es", "en"];

/// Human-readable names for each supported locale (same order as SUPPORTED_LOCALES).
pub const LOCALE_NAMES: &[&str] = &["Español", "English"];

/// A string table maps localization keys to their translated text for a single locale.
pub type StringTable = BTreeMap<String, String>;

// =============================================================================
// Resource
// =============================================================================

#[derive(Resource, Debug, Clone)]
pub struct LocalizationState {
    /// Currently active locale code.
    pub active_locale: String,
    /// String tables keyed by locale code.
    pub tables: BTreeMap<String, StringTable>,
}

impl Default for LocalizationState {
    fn default() -> Self {
        let mut state = Self {
            active_locale: DEFAULT_LOCALE.to_string(),
            tables: BTreeMap::new(),
        };
        state.tables.insert("es".to_string(), build_spanish_table());
        state.tables.insert("en".to_string(), build_english_table());
        state
    }
}

impl LocalizationState {
    /// Look up a key in the active table, then the default table, then return the key.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key).unwrap_or(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.tables
            .get(&self.active_locale)
            .and_then(|table| table.get(key).map(|s| s.as_str()))
            .or_else(|| {
                self.tables
                    .get(DEFAULT_LOCALE)
                    .and_then(|table| table.get(key).map(|s| s.as_str()))
            })
    }

    /// Switch locale. Unsupported codes are ignored.
    pub fn set_locale(&mut self, locale: &str) {
        if self.tables.contains_key(locale) {
            self.active_locale = locale.to_string();
        }
    }

    pub fn active_locale_name(&self) -> &str {
        SUPPORTED_LOCALES
            .iter()
            .position(|code| *code == self.active_locale)
            .map(|i| LOCALE_NAMES[i])
            .unwrap_or(self.active_locale.as_str())
    }

    pub fn available_locales(&self) -> Vec<(&'static str, &'static str)> {
        SUPPORTED_LOCALES
            .iter()
            .zip(LOCALE_NAMES.iter())
            .map(|(code, name)| (*code, *name))
            .collect()
    }
}

/// Startup system: apply the locale chosen in [`crate::config::DashboardSettings`].
pub fn apply_configured_locale(
    settings: Res<crate::config::DashboardSettings>,
    mut localization: ResMut<LocalizationState>,
) {
    localization.set_locale(&settings.locale);
}

fn table(entries: &[(&str, &str)]) -> StringTable {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// =============================================================================
// Spanish string table (complete)
// =============================================================================

fn build_spanish_table() -> StringTable {
    table(&[
        ("app.title", "✨ Visualizador de Impactos - Proyecto P2.2"),
        (
            "app.subtitle",
            "Recuperación de Descartes Hortofrutícola con propiedades herbicidas",
        ),
        (
            "app.intro",
            "Ajusta los parámetros para explorar cómo las proyecciones de impacto ambiental y \
             económico del proyecto varían con diferentes escenarios de volumen disponible, tasa \
             de recuperación y factores de emisión/transporte.",
        ),
        ("sidebar.header", "Parámetros de Simulación"),
        ("sidebar.language", "Idioma"),
        ("sidebar.reset", "Restablecer valores"),
        ("sidebar.version", "Versión del Visualizador"),
        ("sidebar.built_with", "Desarrollado con Bevy y egui"),
        // Parameters
        ("param.total_volume", "Volumen Total Disponible (ton/año):"),
        (
            "param.total_volume.help",
            "Volumen total de descartes hortofrutícolas disponibles anualmente para valorización.",
        ),
        ("param.recovery_rate", "Tasa de Recuperación (%):"),
        (
            "param.recovery_rate.help",
            "Porcentaje del volumen total que es efectivamente recuperado y valorizado.",
        ),
        ("param.landfill_factor", "Factor de Emisión en Relleno (tCO₂e/ton):"),
        (
            "param.landfill_factor.help",
            "Factor de emisiones de GEI por tonelada de residuo enviado a relleno sanitario.",
        ),
        (
            "param.transport_factor",
            "Factor de Transporte (Importación) (tCO₂e/ton):",
        ),
        (
            "param.transport_factor.help",
            "Factor de emisiones de GEI asociadas al transporte por importación de insumos sustituidos.",
        ),
        ("param.market_price", "Precio de Mercado (USD/ton):"),
        (
            "param.market_price.help",
            "Precio promedio de mercado por tonelada del material valorizado (ej. bioherbicida).",
        ),
        // Metrics
        ("results.header", "Resultados Proyectados Anuales:"),
        ("metric.valorized", "♻ Material Valorizado"),
        (
            "metric.valorized.caption",
            "Cantidad de descartes transformados en insumos de valor.",
        ),
        ("metric.avoided_gei", "🌍 GEI Evitados en Relleno"),
        (
            "metric.avoided_gei.caption",
            "Reducción de emisiones de GEI por desvío de residuos de rellenos sanitarios.",
        ),
        ("metric.import_footprint", "🚚 Huella de Importación Evitada"),
        (
            "metric.import_footprint.caption",
            "Reducción de emisiones por menor dependencia de insumos importados.",
        ),
        ("metric.income", "💰 Ingresos Estimados"),
        (
            "metric.income.caption",
            "Ingresos generados por la comercialización del producto valorizado.",
        ),
        ("metric.trained_people", "Personas Capacitadas"),
        (
            "metric.trained_people.caption",
            "Número de personas beneficiadas con capacitación relacionada al proyecto.",
        ),
        ("metric.symbiosis", "🤝 Simbiosis Industrial"),
        (
            "metric.symbiosis.caption",
            "Número de interacciones o alianzas de simbiosis industrial.",
        ),
        // Charts
        ("charts.header", "📊 Análisis Gráfico de Impactos"),
        ("chart.gei.title", "GEI Evitados en Relleno"),
        ("chart.gei.unit", "tCO₂e/año"),
        ("chart.material.title", "Material Valorizado"),
        ("chart.material.unit", "Toneladas/año"),
        ("chart.income.title", "Ingresos Estimados"),
        ("chart.income.unit", "USD/año"),
        ("series.baseline", "Línea Base"),
        ("series.projection", "Proyección"),
        // Downloads
        ("downloads.header", "Descargar Gráficos Individualmente"),
        ("downloads.button", "Descargar"),
        ("downloads.saved", "Gráfico guardado en"),
        ("downloads.failed", "No se pudo exportar el gráfico"),
        // Additional information
        ("info.header", "Información Adicional:"),
        ("info.status.label", "Estado de Avance y Recomendaciones:"),
        (
            "info.status",
            "El proyecto P2 se encuentra en una etapa avanzada de validación de laboratorio, con \
             estudios que han confirmado el potencial herbicida de extractos obtenidos a partir de \
             residuos hortofrutícolas, como el pelón de nuez. La evidencia científica preliminar \
             respalda su capacidad fitotóxica selectiva, lo que constituye un insumo clave para el \
             desarrollo de bioherbicidas comerciales en reemplazo de productos sintéticos de \
             importación.",
        ),
        ("info.recommendations.label", "Recomendaciones:"),
        (
            "info.recommendations",
            "Actualmente, se han identificado volúmenes relevantes de descartes disponibles a nivel \
             regional y se han desarrollado protocolos para su procesamiento, extracción y \
             estandarización de principios activos.",
        ),
        // Footer
        (
            "footer.attribution",
            "Visualizador Creado por el equipo Sustrend SpA en el marco del Proyecto TT GREEN Foods",
        ),
        ("footer.location", "Viña del Mar, Valparaíso, Chile"),
        ("logos.loading", "Cargando logos..."),
        (
            "logos.fetch_error",
            "Error al cargar los logos desde las URLs. Por favor, verifica los enlaces",
        ),
        (
            "logos.decode_error",
            "Error inesperado al procesar las imágenes de los logos",
        ),
    ])
}

// =============================================================================
// English string table
// =============================================================================

fn build_english_table() -> StringTable {
    table(&[
        ("app.title", "✨ Impact Visualizer - Project P2.2"),
        (
            "app.subtitle",
            "Recovery of fruit and vegetable discards with herbicidal properties",
        ),
        (
            "app.intro",
            "Adjust the parameters to explore how the project's environmental and economic impact \
             projections change across scenarios of available volume, recovery rate and \
             emission/transport factors.",
        ),
        ("sidebar.header", "Simulation Parameters"),
        ("sidebar.language", "Language"),
        ("sidebar.reset", "Reset to defaults"),
        ("sidebar.version", "Visualizer version"),
        ("sidebar.built_with", "Built with Bevy and egui"),
        ("param.total_volume", "Total Available Volume (ton/year):"),
        (
            "param.total_volume.help",
            "Total fruit and vegetable discards available each year for valorization.",
        ),
        ("param.recovery_rate", "Recovery Rate (%):"),
        (
            "param.recovery_rate.help",
            "Share of the total volume that is actually recovered and valorized.",
        ),
        ("param.landfill_factor", "Landfill Emission Factor (tCO₂e/ton):"),
        (
            "param.landfill_factor.help",
            "GHG emissions per ton of waste sent to a sanitary landfill.",
        ),
        ("param.transport_factor", "Transport Factor (Imports) (tCO₂e/ton):"),
        (
            "param.transport_factor.help",
            "GHG emissions from transporting the imported inputs being replaced.",
        ),
        ("param.market_price", "Market Price (USD/ton):"),
        (
            "param.market_price.help",
            "Average market price per ton of valorized material (e.g. bioherbicide).",
        ),
        ("results.header", "Projected Annual Results:"),
        ("metric.valorized", "♻ Valorized Material"),
        (
            "metric.valorized.caption",
            "Discards transformed into valuable inputs.",
        ),
        ("metric.avoided_gei", "🌍 Avoided Landfill GHG"),
        (
            "metric.avoided_gei.caption",
            "GHG reduction from diverting waste away from sanitary landfills.",
        ),
        ("metric.import_footprint", "🚚 Avoided Import Footprint"),
        (
            "metric.import_footprint.caption",
            "Emission reduction from lower dependence on imported inputs.",
        ),
        ("metric.income", "💰 Estimated Income"),
        (
            "metric.income.caption",
            "Income from selling the valorized product.",
        ),
        ("metric.trained_people", "Trained People"),
        (
            "metric.trained_people.caption",
            "People benefiting from project-related training.",
        ),
        ("metric.symbiosis", "🤝 Industrial Symbiosis"),
        (
            "metric.symbiosis.caption",
            "Industrial symbiosis interactions or partnerships.",
        ),
        ("charts.header", "📊 Impact Charts"),
        ("chart.gei.title", "Avoided Landfill GHG"),
        ("chart.gei.unit", "tCO₂e/year"),
        ("chart.material.title", "Valorized Material"),
        ("chart.material.unit", "Tons/year"),
        ("chart.income.title", "Estimated Income"),
        ("chart.income.unit", "USD/year"),
        ("series.baseline", "Baseline"),
        ("series.projection", "Projection"),
        ("downloads.header", "Download Charts Individually"),
        ("downloads.button", "Download"),
        ("downloads.saved", "Chart saved to"),
        ("downloads.failed", "Could not export the chart"),
        ("info.header", "Additional Information:"),
        ("info.status.label", "Progress and Recommendations:"),
        (
            "info.status",
            "Project P2 is at an advanced stage of laboratory validation, with studies confirming \
             the herbicidal potential of extracts obtained from fruit and vegetable residues such \
             as walnut hulls. Preliminary evidence supports their selective phytotoxicity, a key \
             input for developing commercial bioherbicides that replace imported synthetic \
             products.",
        ),
        ("info.recommendations.label", "Recommendations:"),
        (
            "info.recommendations",
            "Relevant volumes of discards have been identified regionally, and protocols have been \
             developed for processing, extraction and standardization of the active compounds.",
        ),
        (
            "footer.attribution",
            "Visualizer created by the Sustrend SpA team as part of the TT GREEN Foods Project",
        ),
        ("footer.location", "Viña del Mar, Valparaíso, Chile"),
        ("logos.loading", "Loading logos..."),
        (
            "logos.fetch_error",
            "Could not load the logos from their URLs. Please check the links",
        ),
        (
            "logos.decode_error",
            "Unexpected error while processing the logo images",
        ),
    ])
}
