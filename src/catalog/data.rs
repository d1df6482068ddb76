//! Built-in storefront catalog

use super::{
    models::{Product, ProductId},
    provider::{Catalog, CatalogError},
};
use rust_decimal::Decimal;

/// Returns the three-product catalog the widget ships with.
pub fn builtin_catalog() -> Result<Catalog, CatalogError> {
    Catalog::new(vec![
        Product {
            id: ProductId::new(1),
            name: "Koffein 200 Tabletten".into(),
            description: "Koffeintabletten mit 200mg wasserfreiem Koffein. Pre Workout \
                Booster für Sportler. Wachmacher für Beruf und Alltag."
                .into(),
            price: Decimal::from(10),
            image: "https://whey-protein.ch/media/catalog/product/cache/1/image/1024x/\
                040ec09b1e35df139433887a97daa66f/k/o/koffein-200-tabletten.jpg"
                .into(),
        },
        Product {
            id: ProductId::new(2),
            name: "ESN ASHWA PRO (120 KAPSELN)".into(),
            description: "In der heutigen Zeit kommt es im Alltag schnell zu Stress und \
                innerer Unruhe. Schlaf und Erholungsphasen, die für den menschlichen \
                Organismus zwingend notwendig sind, kommen dadurch häufig zu kurz. Ein \
                negativer Effekt von dauerhaft zu hohem Stress kann ein erhöhter \
                Cortisolspiegel sein. Cortisol steigt naturgemäss bei Stress an und setzt \
                Energie – fast ohne Rücksicht auf Verluste, also unter Umständen auch \
                durch die Unterbindung anderer körperlicher Prozesse – frei, um die \
                Situation zu meistern. Damit du deiner inneren Unruhe und andauernden \
                Müdigkeit nicht hilflos ausgeliefert bist, hat ESN ASHWA PRO entwickelt. \
                Die Kapseln enthalten eine Kombination aus den hochwertigen Anti-Stress \
                Nährstoffen Magnesium, Vitamin B6, Zink und dem patentierten \
                Ashwagandha-Wurzelextrakt KSM-66®."
                .into(),
            price: Decimal::from(15),
            image: "https://www.starfitnutrition.ch/photo/data/\
                esn-ashwa-pro-esn-supplements-go-greens-superfoods-nahrungsmittel-502-14428-4.png\
                ?ts=1704384878"
                .into(),
        },
        Product {
            id: ProductId::new(3),
            name: "Bodylab24 Creatine Powder (500g)".into(),
            description: "Creatine Powder Pulver von Bodylab24 mit Neutral Geschmack. \
                Creatine Powder von Bodylab24 Creatine (auch Kreatin bzw. Creatin) gehört \
                zu den beliebtesten Sport-Supplements. Das ist nicht verwunderlich, denn \
                Creatine ist deine geheime Wunderwaffe, wenn du Kraft und \
                Leistungsfähigkeit steigern möchtest und Muskulatur aufbauen willst! Bei \
                Creatine handelt es sich grundsätzlich um eine Aminosäure, zusammengesetzt \
                aus Arginin, Glycin und Methionin. Creatine trägt zur Versorgung der \
                Muskeln mit Energie bei. Zahlreiche Untersuchungen zu Creatine Monohydrat \
                belegen die Möglichkeiten zur Leistungssteigerung durch Creatine-Einnahme. \
                Die Europäische Behörde für Lebensmittelsicherheit (EFSA) hat in einer \
                Erklärung für Kreatin folgende Wirkungsweise offiziell anerkannt: 3g \
                Creatine pro Tag erhöhen die körperliche Leistung bei Schnellkrafttraining \
                im Rahmen kurzzeitiger intensiver körperlicher Betätigung. Die Wirkung von \
                Creatine Powder Creatine kann bei hochintensiven Aktivitäten wie \
                beispielsweise Sprints, Krafttraining oder HIT Training leistungssteigernd \
                wirken. Außerdem kann durch erhöhte Trainingsintensität der Muskelaufbau \
                gefördert und die Energie und Explosivität gesteigert werden. Für welchen \
                Sportler eignet sich Creatine Powder von Bodylab24? Ganz allgemein kann \
                man festhalten, dass Creatine für jeden Sportler geeignet ist. \
                Mittlerweile verwenden nicht nur Bodybuilder und Kraftsportler, sondern \
                auch zahlreiche Ausdauersportler wie Läufer und Radfahrer Kreatinprodukte, \
                um eine möglichst große Explosivität in Training und Wettkampf zu \
                erzielen. Das Produkt ist nicht für Kinder und Jugendliche unter 18 Jahren \
                geeignet"
                .into(),
            price: Decimal::from(20),
            image: "https://encrypted-tbn2.gstatic.com/shopping?q=tbn:ANd9GcQhuTFQ3-820ttsS282aw45\
                IoH472MA1hHKqWphbxW-7eJatFz4gS-YhIB25ezy0CMcVCeP4KLDwtHj_NPR6qycsl4pV1TkSvZ7eQIrXg\
                BDLJdL347I6J3t"
                .into(),
        },
    ])
}
