// SPDX-License-Identifier: MPL-2.0
//! Full view of a single card: artwork, gameplay data and market prices.
//!
//! The layout has three columns. The large image with its favorite toggle
//! sits on the left, the card data in the middle, and the Cardmarket and
//! TCGPlayer prices on the right.

use crate::api::models::{Ability, Attack, CardMarket, TcgPlayer};
use crate::api::{Card, Client};
use crate::app::images::ImageCache;
use crate::error::Error;
use crate::favorites::FavoritesStore;
use crate::i18n::fluent::I18n;
use crate::ui::components::error_display::ErrorPanel;
use crate::ui::components::status;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::effect::Effect;
use crate::ui::state::{Generation, GenerationTracker, LoadState};
use crate::ui::{format, rarity, styles};
use iced::font::{self, Font};
use iced::widget::{button, rule, text, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length, Task, Theme};

#[derive(Debug, Clone)]
pub enum Message {
    Loaded {
        generation: Generation,
        result: Result<Option<Card>, Error>,
    },
    Back,
    ToggleFavorite,
    Retry,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub favorites: &'a FavoritesStore,
    pub images: &'a ImageCache,
}

#[derive(Debug, Clone)]
pub struct State {
    id: String,
    /// `Loaded(None)` when the API answered without a card.
    card: LoadState<Option<Card>>,
    generation: GenerationTracker,
}

impl State {
    #[must_use]
    pub fn new(id: String) -> Self {
        Self {
            id,
            card: LoadState::Idle,
            generation: GenerationTracker::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn card(&self) -> &LoadState<Option<Card>> {
        &self.card
    }

    pub fn load(&mut self, client: &Client) -> Task<Message> {
        let generation = self.generation.next();
        self.card = LoadState::Loading;

        let client = client.clone();
        let id = self.id.clone();
        Task::perform(
            async move { client.card(&id).await },
            move |result| Message::Loaded { generation, result },
        )
    }

    pub fn handle_message(&mut self, message: Message, client: &Client) -> (Effect, Task<Message>) {
        match message {
            Message::Loaded { generation, result } => {
                if self.generation.accept(generation, "card") {
                    self.card.settle(result);
                }
                (Effect::None, Task::none())
            }
            Message::Back => (Effect::Back, Task::none()),
            Message::ToggleFavorite => (Effect::ToggleFavorite(self.id.clone()), Task::none()),
            Message::Retry => (Effect::None, self.load(client)),
        }
    }

    #[must_use]
    pub fn image_urls(&self) -> Vec<&str> {
        self.card
            .loaded()
            .and_then(Option::as_ref)
            .and_then(|card| card.images.large.as_deref())
            .into_iter()
            .collect()
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        match &self.card {
            LoadState::Idle | LoadState::Loading => status::loading(ctx.i18n.tr("loading")),
            LoadState::Failed(key) => ErrorPanel::failed(
                ctx.i18n.tr("detail-error-title"),
                ctx.i18n.tr(key),
                ctx.i18n.tr("detail-go-back"),
                Message::Back,
            )
            .view(),
            LoadState::Loaded(None) => ErrorPanel::missing(
                ctx.i18n.tr("detail-not-found"),
                ctx.i18n.tr("detail-go-back"),
                Message::Back,
            )
            .view(),
            LoadState::Loaded(Some(card)) => card_view(&ctx, card),
        }
    }
}

fn card_view<'a>(ctx: &ViewContext<'a>, card: &'a Card) -> Element<'a, Message> {
    let back = button(Text::new(format!("← {}", ctx.i18n.tr("detail-back"))).size(typography::BODY))
        .on_press(Message::Back)
        .padding([spacing::XXS, 0.0])
        .style(styles::button::text_link);

    let is_favorite = ctx.favorites.contains(&card.id);

    let columns = Row::new()
        .spacing(spacing::LG)
        .push(artwork(ctx, card, is_favorite))
        .push(
            Container::new(details(ctx, card))
                .width(Length::Fill)
                .padding(spacing::MD),
        )
        .push(
            Container::new(prices(ctx, card, is_favorite))
                .width(Length::Fixed(sizing::PRICE_PANEL_WIDTH))
                .padding(spacing::MD),
        );

    Column::new()
        .spacing(spacing::LG)
        .width(Length::Fill)
        .push(back)
        .push(
            Container::new(columns)
                .width(Length::Fill)
                .padding(spacing::MD)
                .style(styles::container::panel),
        )
        .into()
}

fn artwork<'a>(ctx: &ViewContext<'a>, card: &'a Card, is_favorite: bool) -> Element<'a, Message> {
    let image = status::remote_image(
        ctx.images,
        card.images.large.as_deref(),
        sizing::DETAIL_IMAGE_WIDTH,
        sizing::DETAIL_IMAGE_HEIGHT,
        card.name.clone(),
    );

    let heart = button(Text::new(if is_favorite { "♥" } else { "♡" }).size(typography::TITLE_SM))
        .on_press(Message::ToggleFavorite)
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::favorite(is_favorite));

    Container::new(
        Stack::new().push(image).push(
            Container::new(heart)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Top)
                .padding(spacing::XS),
        ),
    )
    .padding(spacing::MD)
    .into()
}

fn details<'a>(ctx: &ViewContext<'a>, card: &'a Card) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let title = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(card.name.as_str()).size(typography::TITLE_LG).font(bold()))
        .push(
            Row::new()
                .spacing(spacing::XS)
                .align_y(alignment::Vertical::Center)
                .push(rarity::badge(card.rarity.as_deref()))
                .push(
                    Text::new(format::type_line(card.supertype.as_deref(), &card.subtypes))
                        .size(typography::BODY)
                        .style(secondary),
                ),
        );

    let mut set_info = Column::new()
        .spacing(spacing::XXS)
        .push(field(i18n.tr("detail-set"), card.set.name.clone()))
        .push(field(i18n.tr("detail-series"), card.set.series.clone()));
    if let Some(number) = card.collector_number() {
        set_info = set_info.push(field(i18n.tr("detail-number"), number));
    }
    if let Some(artist) = &card.artist {
        set_info = set_info.push(field(i18n.tr("detail-artist"), artist.clone()));
    }

    let mut content = Column::new()
        .spacing(spacing::LG)
        .push(title)
        .push(section(i18n.tr("detail-set-info"), set_info.into()));

    if let Some(hp) = &card.hp {
        content = content.push(section(
            i18n.tr("detail-card-details"),
            stats(i18n, card, hp).into(),
        ));
    }

    if !card.rules.is_empty() {
        content = content.push(section(i18n.tr("detail-rules"), rules(&card.rules)));
    } else if !card.abilities.is_empty() {
        content = content.push(section(
            i18n.tr("detail-abilities"),
            abilities(&card.abilities),
        ));
    }

    if !card.attacks.is_empty() {
        content = content.push(section(
            i18n.tr("detail-attacks"),
            attacks(i18n, &card.attacks),
        ));
    }

    content.into()
}

fn stats<'a>(i18n: &I18n, card: &'a Card, hp: &str) -> Column<'a, Message> {
    let mut stats = Column::new()
        .spacing(spacing::XXS)
        .push(field(i18n.tr("detail-hp"), hp.to_string()));

    if !card.types.is_empty() {
        stats = stats.push(field(i18n.tr("detail-types"), card.types.join(", ")));
    }
    if !card.weaknesses.is_empty() {
        stats = stats.push(field(
            i18n.tr("detail-weaknesses"),
            join_display(&card.weaknesses),
        ));
    }
    if !card.resistances.is_empty() {
        stats = stats.push(field(
            i18n.tr("detail-resistances"),
            join_display(&card.resistances),
        ));
    }
    if let Some(cost) = &card.retreat_cost {
        stats = stats.push(field(i18n.tr("detail-retreat-cost"), cost.len().to_string()));
    }
    stats
}

fn rules(rules: &[String]) -> Element<'_, Message> {
    Column::with_children(rules.iter().map(|rule| {
        Text::new(rule.as_str())
            .size(typography::BODY)
            .font(italic())
            .into()
    }))
    .spacing(spacing::XS)
    .into()
}

fn abilities(abilities: &[Ability]) -> Element<'_, Message> {
    Column::with_children(abilities.iter().map(|ability| {
        let heading = match &ability.kind {
            Some(kind) => format!("{} ({kind})", ability.name),
            None => ability.name.clone(),
        };
        Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(heading).size(typography::BODY).font(bold()))
            .push(
                Text::new(ability.text.as_str())
                    .size(typography::BODY)
                    .font(italic()),
            )
            .into()
    }))
    .spacing(spacing::SM)
    .into()
}

fn attacks<'a>(i18n: &I18n, attacks: &'a [Attack]) -> Element<'a, Message> {
    Column::with_children(attacks.iter().map(|attack| {
        let mut heading = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(Text::new(attack.name.as_str()).size(typography::BODY).font(bold()));
        if let Some(damage) = attack.damage.as_deref().filter(|d| !d.is_empty()) {
            heading = heading.push(
                Container::new(Text::new(damage).size(typography::CAPTION))
                    .padding([spacing::XXS / 2.0, spacing::XS])
                    .style(styles::container::price_tag),
            );
        }

        let mut block = Column::new().spacing(spacing::XXS).push(heading);
        if !attack.cost.is_empty() {
            block = block.push(
                Text::new(i18n.tr_with_args(
                    "detail-attack-cost",
                    &[("cost", &attack.cost.join(", "))],
                ))
                .size(typography::CAPTION)
                .style(secondary),
            );
        }
        if let Some(text) = attack.text.as_deref().filter(|t| !t.is_empty()) {
            block = block.push(Text::new(text).size(typography::BODY).font(italic()));
        }
        block.into()
    }))
    .spacing(spacing::SM)
    .into()
}

fn prices<'a>(ctx: &ViewContext<'a>, card: &'a Card, is_favorite: bool) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let mut content = Column::new()
        .spacing(spacing::LG)
        .push(Text::new(format!("$ {}", i18n.tr("detail-market-prices"))).size(typography::TITLE_SM));

    content = match card.cardmarket.as_ref().filter(|market| market.prices.is_some()) {
        Some(market) => content.push(cardmarket(i18n, market)),
        None => content.push(
            Text::new(i18n.tr("detail-no-pricing"))
                .size(typography::BODY)
                .style(secondary),
        ),
    };

    if let Some(tcgplayer) = card.tcgplayer.as_ref().filter(|t| t.prices.is_some()) {
        content = content.push(tcgplayer_prices(i18n, tcgplayer));
    }

    let (label, style): (_, fn(&Theme, button::Status) -> button::Style) = if is_favorite {
        (i18n.tr("detail-remove-favorite"), styles::button::outline)
    } else {
        (i18n.tr("detail-add-favorite"), styles::button::primary)
    };
    content
        .push(
            button(
                Container::new(Text::new(format!("♥ {label}")).size(typography::BODY))
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Center),
            )
            .on_press(Message::ToggleFavorite)
            .width(Length::Fill)
            .padding([spacing::XS, spacing::MD])
            .style(style),
        )
        .into()
}

fn cardmarket<'a>(i18n: &I18n, market: &'a CardMarket) -> Element<'a, Message> {
    let Some(prices) = &market.prices else {
        return Column::new().into();
    };

    let headline = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(format::price(prices.average_sell_price))
                .size(typography::TITLE_MD)
                .font(bold())
                .style(|theme: &Theme| text::Style {
                    color: Some(crate::ui::theming::Scheme::of(theme).brand),
                }),
        )
        .push(
            Text::new(i18n.tr("detail-average-sell"))
                .size(typography::CAPTION)
                .style(secondary),
        );

    let cells = [
        (prices.low_price, "detail-low-price"),
        (prices.trend_price, "detail-trend-price"),
        (prices.avg1, "detail-avg1"),
        (prices.avg7, "detail-avg7"),
        (prices.avg30, "detail-avg30"),
        (prices.reverse_holo_avg1, "detail-reverse-holo"),
    ];

    let mut grid = Column::new().spacing(spacing::SM);
    for pair in cells.chunks(2) {
        let mut row = Row::new().spacing(spacing::SM);
        for (value, key) in pair {
            row = row.push(
                Container::new(price_cell(format::price(*value), i18n.tr(key)))
                    .width(Length::FillPortion(1))
                    .padding(spacing::XS)
                    .style(styles::container::section),
            );
        }
        grid = grid.push(row);
    }

    let mut content = Column::new().spacing(spacing::MD).push(headline).push(grid);
    if let Some(url) = &market.url {
        content = content.push(link(i18n.tr("detail-cardmarket-link"), url));
    }
    content.into()
}

fn tcgplayer_prices<'a>(i18n: &I18n, tcgplayer: &'a TcgPlayer) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::SM)
        .push(rule::horizontal(1))
        .push(Text::new(i18n.tr("detail-tcgplayer-prices")).size(typography::BODY_LG).font(bold()));

    for (variant, prices) in tcgplayer.prices.iter().flatten() {
        let mut row = Row::new().spacing(spacing::SM);
        for (value, key) in [
            (prices.low, "detail-tcgplayer-low"),
            (prices.mid, "detail-tcgplayer-mid"),
            (prices.high, "detail-tcgplayer-high"),
        ] {
            row = row.push(
                Container::new(price_cell(format::price(value), i18n.tr(key)))
                    .width(Length::FillPortion(1)),
            );
        }
        content = content.push(
            Column::new()
                .spacing(spacing::XXS)
                .push(Text::new(format::variant_label(variant)).size(typography::BODY))
                .push(row),
        );
    }

    if let Some(url) = &tcgplayer.url {
        content = content.push(link(i18n.tr("detail-tcgplayer-link"), url));
    }
    content.into()
}

fn price_cell<'a>(value: String, label: String) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(value).size(typography::BODY).font(bold()))
        .push(Text::new(label).size(typography::CAPTION).style(secondary))
        .into()
}

fn link<'a>(label: String, url: &'a str) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(format!("{label}:")).size(typography::CAPTION).style(secondary))
        .push(Text::new(url).size(typography::CAPTION))
        .into()
}

fn section<'a>(title: String, content: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(title).size(typography::TITLE_SM).font(bold()))
        .push(content)
        .into()
}

fn field<'a>(label: String, value: String) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XXS)
        .push(Text::new(format!("{label}:")).size(typography::BODY).font(bold()))
        .push(Text::new(value).size(typography::BODY))
        .into()
}

fn join_display<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn secondary(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().background.strong.text),
    }
}

fn bold() -> Font {
    Font {
        weight: font::Weight::Bold,
        ..Font::DEFAULT
    }
}

fn italic() -> Font {
    Font {
        style: font::Style::Italic,
        ..Font::DEFAULT
    }
}
