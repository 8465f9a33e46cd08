use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

use eframe::{egui, App, Frame};
use tokio::runtime::Handle;

use crate::error::WeatherError;
use crate::panel::{FetchRequest, WeatherPanel};
use crate::weather::{WeatherClient, WeatherReport};

type FetchResult = (u64, Result<WeatherReport, WeatherError>);

const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(240, 240, 240);
const TEXT: egui::Color32 = egui::Color32::from_rgb(51, 51, 51);
const BUTTON: egui::Color32 = egui::Color32::from_rgb(0, 120, 215);

pub struct WeatherApp {
    panel: WeatherPanel,
    client: Option<Arc<WeatherClient>>,
    runtime: Handle,
    result_tx: Sender<FetchResult>,
    result_rx: Receiver<FetchResult>,
}

impl WeatherApp {
    /// `client` is `Err` when configuration failed; the window still opens and
    /// shows that error whenever a fetch is attempted.
    pub fn new(client: Result<WeatherClient, WeatherError>, runtime: Handle) -> Self {
        let (result_tx, result_rx) = channel();
        let (client, config_error) = match client {
            Ok(client) => (Some(Arc::new(client)), None),
            Err(e) => (None, Some(e)),
        };
        Self {
            panel: WeatherPanel::new(config_error),
            client,
            runtime,
            result_tx,
            result_rx,
        }
    }

    fn spawn_fetch(&self, ctx: &egui::Context, request: FetchRequest) {
        let Some(client) = self.client.clone() else {
            return;
        };
        let tx = self.result_tx.clone();
        let ctx = ctx.clone();

        // Network work stays off the UI thread; the result comes back through the channel
        self.runtime.spawn(async move {
            let result = client.fetch_current(&request.city).await;
            let _ = tx.send((request.id, result));
            ctx.request_repaint();
        });
    }

    fn drain_results(&mut self) {
        while let Ok((id, result)) = self.result_rx.try_recv() {
            self.panel.apply(id, result);
        }
    }
}

impl App for WeatherApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.drain_results();

        let mut fetch = false;
        let mut toggle = false;

        let frame = egui::Frame::central_panel(&ctx.style()).fill(BACKGROUND);
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.spacing_mut().item_spacing.y = 20.0;

                ui.label(
                    egui::RichText::new("Enter city name:")
                        .size(22.0)
                        .strong()
                        .color(TEXT),
                );
                ui.add(
                    egui::TextEdit::singleline(self.panel.city_mut())
                        .font(egui::FontId::proportional(18.0)),
                );

                fetch = ui.add(blue_button("Get Weather")).clicked();
                toggle = ui.add(blue_button(&self.panel.toggle_label())).clicked();

                if self.panel.is_loading() {
                    ui.spinner();
                }

                let temperature = egui::RichText::new(self.panel.temperature_text());
                let temperature = if self.panel.is_error() {
                    temperature.size(30.0).color(egui::Color32::RED)
                } else {
                    temperature.size(90.0).strong().color(TEXT)
                };
                ui.label(temperature);
                ui.label(egui::RichText::new(self.panel.emoji()).size(70.0));
                ui.label(
                    egui::RichText::new(self.panel.description())
                        .size(40.0)
                        .italics()
                        .color(TEXT),
                );
            });
        });

        if fetch {
            if let Some(request) = self.panel.request_fetch() {
                self.spawn_fetch(ctx, request);
            }
        }
        if toggle {
            if let Some(request) = self.panel.toggle_unit() {
                self.spawn_fetch(ctx, request);
            }
        }
    }
}

fn blue_button(text: &str) -> egui::Button {
    egui::Button::new(egui::RichText::new(text).size(18.0).color(egui::Color32::WHITE))
        .fill(BUTTON)
}
